use std::sync::Arc;
use uuid::Uuid;

/// Callback invoked with the listener id and the shared event.
pub type Callback<T> = Arc<dyn Fn(Uuid, Arc<T>) + Send + Sync>;

/// Anything that can be registered with a [`Publisher`](crate::Publisher).
pub trait Notifiable<T> {
    fn get_callback(&self) -> Callback<T>;
    fn set_id(&mut self, id: Uuid);
    fn get_id(&self) -> Option<Uuid>;
}

/// Closure-backed listener. The id is filled in on registration.
#[derive(Clone)]
pub struct Listener<T> {
    callback: Callback<T>,
    id: Option<Uuid>,
}

impl<T> Listener<T>
where
    T: Send + Sync + 'static,
{
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Uuid, Arc<T>) + Send + Sync + 'static,
    {
        Listener {
            callback: Arc::new(callback),
            id: None,
        }
    }
}

impl<T> Notifiable<T> for Listener<T> {
    fn get_callback(&self) -> Callback<T> {
        self.callback.clone()
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    fn get_id(&self) -> Option<Uuid> {
        self.id
    }
}

impl<T> std::fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("callback", &"<callback_fn>")
            .finish()
    }
}
