/// Components that can be switched into a non-interactive state.
///
/// Disabled components keep their layout but drop their handlers and swap to
/// the disabled color roles of the active theme.
pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;

    fn enabled(self, value: bool) -> Self {
        self.disabled(!value)
    }
}

macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(mut self, value: bool) -> Self {
                self.disabled = value;
                self
            }
        }
    };
}

pub(crate) use impl_disableable;
