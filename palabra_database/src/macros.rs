/// Wraps a boxed database row stream in a named struct that implements
/// [`Stream`], mapping every item through the given closure.
///
/// Used to hand out streams of strongly-typed models (or errors)
/// without boxing them a second time.
///
/// ```rust,ignore
/// type RawExerciseStream<'c> = BoxStream<'c, Result<InternalExerciseModel, sqlx::Error>>;
///
/// create_async_stream_wrapper!(
///     pub struct ExerciseStream<'c>;
///     transforms stream RawExerciseStream<'c> => stream of QueryResult<ExerciseModel>:
///         |value| value.map(|result| ...)
/// );
/// ```
///
/// [`Stream`]: futures_core::Stream
macro_rules! create_async_stream_wrapper {
    (
        $visibility:vis struct $wrapper_name:ident<$lifetime:lifetime>;
        transforms stream $wrapped_type:ty => stream of $item_type:ty:
            |$next_item:ident| $mapper:expr
    ) => {
        pin_project_lite::pin_project! {
            $visibility struct $wrapper_name<$lifetime> {
                #[pin]
                inner: $wrapped_type
            }
        }

        impl<$lifetime> $wrapper_name<$lifetime> {
            #[inline]
            fn new(inner: $wrapped_type) -> Self {
                Self { inner }
            }
        }

        impl<$lifetime> futures_core::Stream for $wrapper_name<$lifetime> {
            type Item = $item_type;

            fn poll_next(
                self: std::pin::Pin<&mut Self>,
                cx: &mut std::task::Context<'_>,
            ) -> std::task::Poll<Option<Self::Item>> {
                <$wrapped_type as futures_core::Stream>::poll_next(self.project().inner, cx)
                    .map(|$next_item| $mapper)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                <$wrapped_type as futures_core::Stream>::size_hint(&self.inner)
            }
        }
    };
}
