// Singleton: one process-wide instance, created on first use.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static PRINTER_INITIALISATIONS: AtomicUsize = AtomicUsize::new(0);
static DUMMY_INITIALISATIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct PrinterDriver {
    _private: (),
}

lazy_static::lazy_static! {
    static ref PRINTER_DRIVER: PrinterDriver = {
        PRINTER_INITIALISATIONS.fetch_add(1, Ordering::SeqCst);
        PrinterDriver { _private: () }
    };
}

impl PrinterDriver {
    pub fn instance() -> &'static PrinterDriver {
        &PRINTER_DRIVER
    }

    /// Returns the driver so calls can be chained.
    pub fn print(&'static self) -> &'static PrinterDriver {
        self
    }

    pub fn describe(&self) -> String {
        format!("Printing with object: {:p}", self)
    }

    pub fn initialisations() -> usize {
        PRINTER_INITIALISATIONS.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct Dummy {
    _private: (),
}

impl Dummy {
    pub fn describe(&self) -> String {
        format!("Print object {:p}", self)
    }
}

pub struct DummySingleton;

impl DummySingleton {
    pub fn instance() -> &'static Dummy {
        static INSTANCE: OnceLock<Dummy> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            DUMMY_INITIALISATIONS.fetch_add(1, Ordering::SeqCst);
            Dummy { _private: () }
        })
    }

    pub fn initialisations() -> usize {
        DUMMY_INITIALISATIONS.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_printer_driver_is_shared() {
        let first = PrinterDriver::instance().print();
        let second = PrinterDriver::instance().print();

        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, PrinterDriver::instance()));
        assert_eq!(PrinterDriver::initialisations(), 1);
        assert_eq!(first.describe(), second.describe());
    }

    #[test]
    fn test_dummy_initialised_once_across_threads() {
        let addresses: Vec<usize> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| DummySingleton::instance() as *const Dummy as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let main_addr = DummySingleton::instance() as *const Dummy as usize;
        assert!(addresses.iter().all(|&addr| addr == main_addr));
        assert_eq!(DummySingleton::initialisations(), 1);
    }
}
