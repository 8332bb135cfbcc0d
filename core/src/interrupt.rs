use crate::error::{BResult, RadixError};

/// Polled by long-running operations. Returning `true` aborts the
/// current computation with [`RadixError::Interrupted`].
pub trait Interrupt {
    fn should_interrupt(&self) -> bool;
}

pub(crate) fn test_int<I: Interrupt>(int: &I) -> BResult<()> {
    if int.should_interrupt() {
        Err(RadixError::Interrupted)
    } else {
        Ok(())
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct Never {}
impl Interrupt for Never {
    fn should_interrupt(&self) -> bool {
        false
    }
}

impl<T: Interrupt + ?Sized> Interrupt for &T {
    fn should_interrupt(&self) -> bool {
        (**self).should_interrupt()
    }
}
