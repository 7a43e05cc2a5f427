#[cfg(test)]
mod tests {
    use hydrate::{
        AsValue, DeclaredType, Entity, EntityError, Error, Hydrator, Marker, MarkerKind, Result,
        RowsResult, Value, ValueConverter, row,
    };
    use hydrate_tests::{MultipleAttributes, Product, init_logs};
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    /// Amount in cents, stored as text with two decimals.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Money(i64);

    impl AsValue for Money {
        fn declared_type() -> DeclaredType {
            DeclaredType::Custom("money")
        }
        fn as_empty_value() -> Value {
            Value::Int64(None)
        }
        fn as_value(self) -> Value {
            Value::Int64(Some(self.0))
        }
        fn try_from_value(value: Value) -> Result<Self> {
            match value {
                Value::Int64(Some(v)) => Ok(Money(v)),
                _ => Err(Error::msg(format!("Cannot convert {value:?} to Money"))),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Entity)]
    struct Order {
        id: i32,
        total: Money,
    }

    #[derive(Debug, Default)]
    struct MoneyConverter;

    impl ValueConverter for MoneyConverter {
        fn can_handle(&self, declared_type: &DeclaredType, _entity: &'static str) -> bool {
            matches!(declared_type, DeclaredType::Custom("money"))
        }
        fn from_storage(
            &self,
            _declared_type: &DeclaredType,
            value: Value,
            _markers: &[Marker],
        ) -> Result<Value> {
            let Value::Varchar(Some(text)) = value else {
                return Err(Error::msg("Money is stored as text"));
            };
            let Some((units, cents)) = text.split_once('.') else {
                return Err(Error::msg(format!("`{text}` is not an amount")));
            };
            Ok(Value::Int64(Some(
                units.parse::<i64>()? * 100 + cents.parse::<i64>()?,
            )))
        }
        fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
            let Value::Int64(Some(v)) = value else {
                return Err(Error::msg("Money is held in cents"));
            };
            Ok(Value::Varchar(Some(format!("{}.{:02}", v / 100, v % 100))))
        }
    }

    #[derive(Debug, Clone, PartialEq, Entity)]
    struct Shout {
        word: String,
    }

    /// Upper cases the text fields of `Shout` only.
    #[derive(Debug, Default)]
    struct ShoutConverter;

    impl ValueConverter for ShoutConverter {
        fn can_handle(&self, declared_type: &DeclaredType, entity: &'static str) -> bool {
            matches!(declared_type, DeclaredType::Varchar) && entity.ends_with("::Shout")
        }
        fn from_storage(
            &self,
            _declared_type: &DeclaredType,
            value: Value,
            _markers: &[Marker],
        ) -> Result<Value> {
            match value {
                Value::Varchar(Some(v)) => Ok(Value::Varchar(Some(v.to_uppercase()))),
                _ => Err(Error::msg("Expected text")),
            }
        }
        fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
            match value {
                Value::Varchar(Some(v)) => Ok(Value::Varchar(Some(v.to_lowercase()))),
                _ => Err(Error::msg("Expected text")),
            }
        }
    }

    /// Never handles anything, counts how many times it is asked.
    #[derive(Debug, Default)]
    struct CountingConverter {
        asked: Arc<AtomicUsize>,
    }

    impl ValueConverter for CountingConverter {
        fn can_handle(&self, _declared_type: &DeclaredType, _entity: &'static str) -> bool {
            self.asked.fetch_add(1, Ordering::Relaxed);
            false
        }
        fn from_storage(
            &self,
            _declared_type: &DeclaredType,
            value: Value,
            _markers: &[Marker],
        ) -> Result<Value> {
            Ok(value)
        }
        fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
            Ok(value)
        }
    }

    /// Records the `test` markers it receives.
    #[derive(Debug, Default)]
    struct TagCollector {
        seen: Arc<Mutex<Vec<Marker>>>,
    }

    impl ValueConverter for TagCollector {
        fn can_handle(&self, declared_type: &DeclaredType, entity: &'static str) -> bool {
            matches!(declared_type, DeclaredType::Integer)
                && entity.ends_with("::MultipleAttributes")
        }
        fn from_storage(
            &self,
            _declared_type: &DeclaredType,
            value: Value,
            markers: &[Marker],
        ) -> Result<Value> {
            self.seen.lock().unwrap().extend_from_slice(markers);
            Ok(value)
        }
        fn to_storage(&self, value: Value, _markers: &[Marker]) -> Result<Value> {
            Ok(value)
        }
        fn required_marker(&self) -> Option<MarkerKind> {
            Some(MarkerKind::Tagged("test"))
        }
    }

    #[test]
    fn unsupported_type() {
        init_logs();
        let hydrator = Hydrator::new();
        let mut result = RowsResult::new([row! { "id" => 1, "total" => "12.50" }]);
        let error = hydrator
            .create_one::<Order, _>(&mut result)
            .expect_err("No converter handles money");
        assert!(matches!(
            error.downcast_ref::<EntityError>(),
            Some(EntityError::UnsupportedType { type_name: "money" })
        ));
        assert!(format!("{error:#}").contains("Type `money` is not supported"));
    }

    #[test]
    fn custom_converter() {
        init_logs();
        let hydrator = Hydrator::builder().converter(MoneyConverter).build();
        let mut result = RowsResult::new([
            row! { "id" => 1, "total" => "12.50" },
            row! { "id" => 2, "total" => "0.07" },
        ]);
        let orders = hydrator
            .create_all::<Order, _>(&mut result)
            .expect("The money converter handles the total");
        assert_eq!(
            orders,
            [
                Order {
                    id: 1,
                    total: Money(1250)
                },
                Order {
                    id: 2,
                    total: Money(7)
                },
            ]
        );
        let row = hydrator
            .to_storage(&orders[0])
            .expect("The order must be storable");
        assert_eq!(
            row.get_column("total"),
            Some(&Value::Varchar(Some("12.50".into())))
        );
    }

    #[test]
    fn registered_converter_comes_first() {
        init_logs();
        let hydrator = Hydrator::builder().converter(ShoutConverter).build();
        let shout = hydrator
            .create_one::<Shout, _>(&mut RowsResult::new([row! { "word" => "hello" }]))
            .expect("The word must be read")
            .expect("The result has one row");
        assert_eq!(shout.word, "HELLO");
        let product = hydrator
            .create_one::<Product, _>(&mut RowsResult::new([row! {
                "id" => 1,
                "is_purchasable" => true,
                "config" => "quiet",
            }]))
            .expect("The product must be read")
            .expect("The result has one row");
        assert_eq!(product.config, "quiet");
        let row = hydrator
            .to_storage(&shout)
            .expect("The word must be storable");
        assert_eq!(
            row.get_column("word"),
            Some(&Value::Varchar(Some("hello".into())))
        );
    }

    #[test]
    fn resolved_once_per_type() {
        init_logs();
        let asked = Arc::new(AtomicUsize::new(0));
        let hydrator = Hydrator::builder()
            .converter(CountingConverter {
                asked: asked.clone(),
            })
            .build();
        let rows = || {
            (0..50).map(|id| {
                row! {
                    "id" => id,
                    "is_purchasable" => id % 2,
                    "config" => "{}",
                }
            })
        };
        let products = hydrator
            .create_all::<Product, _>(&mut RowsResult::new(rows()))
            .expect("Every row must produce a product");
        assert_eq!(products.len(), 50);
        assert_eq!(asked.load(Ordering::Relaxed), 3);
        hydrator
            .create_all::<Product, _>(&mut RowsResult::new(rows()))
            .expect("Every row must produce a product");
        assert_eq!(asked.load(Ordering::Relaxed), 3);
        assert_eq!(hydrator.registry().resolved(), 3);
    }

    #[test]
    fn required_markers_in_order() {
        init_logs();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let hydrator = Hydrator::builder()
            .converter(TagCollector { seen: seen.clone() })
            .build();
        let entity = hydrator
            .create_one::<MultipleAttributes, _>(&mut RowsResult::new([row! {
                "last_name" => "Smith",
                "product_count" => 3,
            }]))
            .expect("The entity must be read")
            .expect("The result has one row");
        assert_eq!(entity.product_count, 3);
        assert_eq!(
            *seen.lock().unwrap(),
            [1, 2, 3, 4].map(|v| Marker::Tagged("test", Value::from(v)))
        );
    }

    #[test]
    fn shared_between_threads() {
        init_logs();
        let hydrator = Arc::new(Hydrator::builder().converter(MoneyConverter).build());
        let handles: Vec<_> = (0..4)
            .map(|id| {
                let hydrator = hydrator.clone();
                std::thread::spawn(move || {
                    hydrator
                        .create_one::<Order, _>(&mut RowsResult::new([row! {
                            "id" => id,
                            "total" => "1.00",
                        }]))
                        .expect("The order must be read")
                        .expect("The result has one row")
                })
            })
            .collect();
        for (id, handle) in handles.into_iter().enumerate() {
            let order = handle.join().expect("The thread must not panic");
            assert_eq!(order.id, id as i32);
            assert_eq!(order.total, Money(100));
        }
    }
}
