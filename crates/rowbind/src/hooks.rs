use crate::Result;

/// Optional lifecycle callbacks for a record.
///
/// Annotate the struct with `#[hooks]` and implement this trait to opt in.
/// Every method defaults to doing nothing. An error returned from a `before_*`
/// callback prevents the statement from running; an error from an `after_*`
/// callback is reported once the statement has already taken effect.
///
/// ```ignore
/// #[derive(Default, rowbind::Record)]
/// #[hooks]
/// struct User {
///     #[column("id, PRIMARY_KEY, AUTO_INCREMENT")]
///     id: i64,
///     #[column]
///     email: String,
/// }
///
/// impl rowbind::Hooks for User {
///     fn before_insert(&mut self) -> rowbind::Result<()> {
///         if !self.email.contains('@') {
///             rowbind::bail!("invalid email: {}", self.email);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Hooks {
    fn after_load(&mut self) -> Result<()> {
        Ok(())
    }

    fn before_insert(&mut self) -> Result<()> {
        Ok(())
    }

    fn after_insert(&mut self) -> Result<()> {
        Ok(())
    }

    fn before_update(&mut self) -> Result<()> {
        Ok(())
    }

    fn after_update(&mut self) -> Result<()> {
        Ok(())
    }

    fn before_delete(&mut self) -> Result<()> {
        Ok(())
    }
}
