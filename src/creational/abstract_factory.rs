// Abstract Factory: pick a concrete factory from the product type you want.

use std::any::{type_name, TypeId};
use std::fmt::Debug;

use crate::error::{PatternError, Result};

pub trait Plant: Debug {
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrangePlant;

impl Plant for OrangePlant {
    fn name(&self) -> &'static str {
        "orange"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplePlant;

impl Plant for ApplePlant {
    fn name(&self) -> &'static str {
        "apple"
    }
}

pub trait PlantFactory {
    fn make_plant(&self) -> Box<dyn Plant>;
}

pub struct OrangeFactory;

impl PlantFactory for OrangeFactory {
    fn make_plant(&self) -> Box<dyn Plant> {
        Box::new(OrangePlant)
    }
}

pub struct AppleFactory;

impl PlantFactory for AppleFactory {
    fn make_plant(&self) -> Box<dyn Plant> {
        Box::new(ApplePlant)
    }
}

/// Returns the factory that produces plants of type `T`.
///
/// Only the plants this module knows about have a factory; any other
/// `Plant` implementation is rejected.
pub fn create_factory<T: Plant + 'static>() -> Result<Box<dyn PlantFactory>> {
    let wanted = TypeId::of::<T>();

    if wanted == TypeId::of::<OrangePlant>() {
        Ok(Box::new(OrangeFactory))
    } else if wanted == TypeId::of::<ApplePlant>() {
        Ok(Box::new(AppleFactory))
    } else {
        Err(PatternError::UnsupportedPlant(type_name::<T>()))
    }
}
