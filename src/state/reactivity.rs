// ============================================================================
// REACTIVITY - Valor compartido + subscribers notificados en cada cambio
// ============================================================================
// Single-thread (Rc<RefCell>). Los subscribers reciben el valor nuevo y
// derivan lo que necesiten (p.ej. validez del formulario) en ese momento.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Identificador devuelto por `subscribe`, para poder darse de baja
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
    next_id: Cell<u64>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Referencia compartida al valor interno
    pub fn get(&self) -> Rc<RefCell<T>> {
        self.value.clone()
    }

    /// Leer el valor actual
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&*self.value.borrow())
    }

    pub fn snapshot(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let callback: Subscriber<T> = Rc::new(callback);
        self.subscribers.borrow_mut().push((id, callback));
        id
    }

    /// Devuelve false si el id ya no estaba suscrito
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Reemplaza el valor y notifica
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Modifica el valor en sitio y notifica
    pub fn update(&self, updater: impl FnOnce(&mut T)) {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    // Sin borrows abiertos durante los callbacks: pueden llamar a set/update
    // y (des)suscribirse. Los cambios de suscripción aplican al siguiente notify
    fn notify(&self) {
        let value = self.snapshot();
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    /// Comparte el valor, pero no los subscribers
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }
}
