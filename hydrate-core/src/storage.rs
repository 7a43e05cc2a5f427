use crate::{Result, RowLabeled};

/// Receives the persistable rows produced by [`Hydrator::store`](crate::Hydrator::store).
pub trait StorageWriter {
    fn write(&mut self, table: &'static str, row: RowLabeled) -> Result<()>;
}

impl StorageWriter for Vec<(&'static str, RowLabeled)> {
    fn write(&mut self, table: &'static str, row: RowLabeled) -> Result<()> {
        self.push((table, row));
        Ok(())
    }
}

impl<W: StorageWriter + ?Sized> StorageWriter for &mut W {
    fn write(&mut self, table: &'static str, row: RowLabeled) -> Result<()> {
        (**self).write(table, row)
    }
}
