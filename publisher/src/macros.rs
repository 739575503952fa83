/// Builds a [`Listener`](crate::Listener) that forwards every event to `handler.method(id, value)`.
///
/// `handler` must be cheaply cloneable (typically an `Arc`).
#[macro_export]
macro_rules! listener {
    ($handler:ident.$method:ident) => {
        $crate::Listener::new({
            let handler = $handler.clone();
            move |id, value| handler.$method(id, value)
        })
    };
}
