#[derive(Clone)]
pub enum EitherIterator<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    Left(A),
    Right(B),
}
impl<A, B> Iterator for EitherIterator<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            EitherIterator::Left(a) => a.next(),
            EitherIterator::Right(b) => b.next(),
        }
    }
}

pub fn consume_while<'s>(input: &mut &'s str, predicate: impl FnMut(&char) -> bool) -> &'s str {
    let len = input
        .chars()
        .take_while(predicate)
        .map(char::len_utf8)
        .sum::<usize>();
    if len == 0 {
        return "";
    }
    let result = &input[..len];
    *input = &input[len..];
    result
}

/// Longest prefix of `text` that fits in `max` bytes and ends on a char boundary.
pub fn truncate_str(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}",
            $crate::truncate_str($query, 497).trim_end(),
            if $query.len() > 497 { "..." } else { "" },
        )
    };
}

/// Builds a [`RowLabeled`](crate::RowLabeled) out of `column => value` pairs.
///
/// ```rust
/// use hydrate_core::{Value, row};
/// let row = row! { "id" => 1, "name" => "John", "deleted_at" => Value::Null };
/// assert_eq!(row.get_column("id"), Some(&Value::Int64(Some(1))));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::RowLabeled::default()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {
        [$(($column, $crate::Value::from($value))),*]
            .into_iter()
            .collect::<$crate::RowLabeled>()
    };
}
