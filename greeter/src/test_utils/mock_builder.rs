use std::sync::Arc;

/// Helper to create configured Mockall mock.
///
/// This allows creation of the mock in a dedicated block isolated from the remaining test method
/// code, the result can be given directly to a constructor expecting an `Arc<dyn Trait>`.
pub struct MockBuilder<M: Default> {
    phantom: std::marker::PhantomData<M>,
}

impl<M: Default> MockBuilder<M> {
    /// Create a new instance of the mock with the given configuration
    ///
    /// The type must be specified either:
    /// ```
    /// use greeter::test_utils::MockBuilder;
    /// # #[derive(Default)] struct MockType {};
    ///
    /// // from the builder generic
    /// let mock = MockBuilder::<MockType>::configure(|mock| {});
    ///
    /// // or from the closure parameter
    /// let mock = MockBuilder::configure(|mock: &mut MockType| {});
    /// ```
    pub fn configure(mock_config: impl FnOnce(&mut M)) -> Arc<M> {
        let mut mock = M::default();
        mock_config(&mut mock);
        Arc::new(mock)
    }
}

#[cfg(test)]
mod tests {
    use crate::{MockNameResolver, NameResolver};

    use super::*;

    #[test]
    fn configure_mock_with_explicit_closure_type() {
        let mock = MockBuilder::configure(|mock: &mut MockNameResolver| {
            mock.expect_resolve_name()
                .returning(|| Ok("explicit type".to_string()));
        });

        assert_eq!("explicit type", mock.resolve_name().unwrap());
    }

    #[test]
    fn configure_mock_with_turbofish() {
        let mock = MockBuilder::<MockNameResolver>::configure(|mock| {
            mock.expect_resolve_name()
                .returning(|| Ok("turbofish".to_string()));
        });

        assert_eq!("turbofish", mock.resolve_name().unwrap());
    }
}
