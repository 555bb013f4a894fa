// Adapter: present a Celsius reading through a Fahrenheit interface.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Temperature {
    fn temperature(&self) -> f64;
    fn set_temperature(&mut self, value: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelsiusTemperature {
    temperature: f64,
}

impl CelsiusTemperature {
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }

    pub fn shared(temperature: f64) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(temperature)))
    }
}

impl Temperature for CelsiusTemperature {
    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn set_temperature(&mut self, value: f64) {
        self.temperature = value;
    }
}

/// Reads and writes the wrapped Celsius value in degrees Fahrenheit.
pub struct FahrenheitTemperature {
    celsius: Rc<RefCell<CelsiusTemperature>>,
}

impl FahrenheitTemperature {
    pub fn new(celsius: Rc<RefCell<CelsiusTemperature>>) -> Self {
        Self { celsius }
    }
}

impl Temperature for FahrenheitTemperature {
    fn temperature(&self) -> f64 {
        celsius_to_fahrenheit(self.celsius.borrow().temperature())
    }

    fn set_temperature(&mut self, value: f64) {
        self.celsius
            .borrow_mut()
            .set_temperature(fahrenheit_to_celsius(value));
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    round_cents(c * 9.0 / 5.0 + 32.0)
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    round_cents((f - 32.0) * 5.0 / 9.0)
}
