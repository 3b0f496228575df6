#[macro_export]
macro_rules! from_error {
    ($from:ty, $to_variant:ident) => {
        impl From<$from> for crate::utils::error::QueueError {
            fn from(err: $from) -> Self {
                crate::utils::error::QueueError::$to_variant(err)
            }
        }
    };
}
