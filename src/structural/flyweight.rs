// Flyweight: race car clients share intrinsic car data and keep their own position.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{PatternError, Result};

/// Intrinsic, shareable car data.
#[derive(Debug, PartialEq, Eq)]
pub struct RaceCar {
    pub name: String,
    pub speed: u32,
    pub horse_power: u32,
}

#[derive(Debug, Default)]
pub struct CarFactory {
    flyweights: HashMap<String, Rc<RaceCar>>,
    instances_created: usize,
}

impl CarFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_race_car(&mut self, key: &str) -> Result<Rc<RaceCar>> {
        if let Some(car) = self.flyweights.get(key) {
            return Ok(Rc::clone(car));
        }

        let car = match key {
            "Midget" => RaceCar {
                name: "Midget Car".to_string(),
                speed: 140,
                horse_power: 400,
            },
            other => return Err(PatternError::UnsupportedCarType(other.to_string())),
        };

        let car = Rc::new(car);
        self.instances_created += 1;
        self.flyweights.insert(key.to_string(), Rc::clone(&car));
        Ok(car)
    }

    pub fn instances_created(&self) -> usize {
        self.instances_created
    }
}

pub struct RaceCarClient {
    race_car: Rc<RaceCar>,
    current_x: i32,
    current_y: i32,
}

impl RaceCarClient {
    pub fn new(factory: &mut CarFactory, key: &str) -> Result<Self> {
        Ok(Self {
            race_car: factory.get_race_car(key)?,
            current_x: 0,
            current_y: 0,
        })
    }

    pub fn move_car(&mut self, new_x: i32, new_y: i32) -> String {
        self.current_x = new_x;
        self.current_y = new_y;
        format!(
            "New location of {} is X{} - Y{}",
            self.race_car.name, new_x, new_y
        )
    }

    pub fn position(&self) -> (i32, i32) {
        (self.current_x, self.current_y)
    }

    pub fn race_car(&self) -> &Rc<RaceCar> {
        &self.race_car
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clients_share_one_flyweight() {
        let mut factory = CarFactory::new();
        let mut cars: Vec<RaceCarClient> = (0..3)
            .map(|_| RaceCarClient::new(&mut factory, "Midget").unwrap())
            .collect();

        assert_eq!(cars[0].move_car(29, 3112), "New location of Midget Car is X29 - Y3112");
        cars[1].move_car(39, 2002);
        cars[2].move_car(49, 1985);

        assert_eq!(factory.instances_created(), 1);
        assert!(Rc::ptr_eq(cars[0].race_car(), cars[2].race_car()));
        // Three clients plus the factory's cache.
        assert_eq!(Rc::strong_count(cars[0].race_car()), 4);
    }

    #[test]
    fn test_position_is_per_client() {
        let mut factory = CarFactory::new();
        let mut first = RaceCarClient::new(&mut factory, "Midget").unwrap();
        let second = RaceCarClient::new(&mut factory, "Midget").unwrap();

        first.move_car(10, 20);
        assert_eq!(first.position(), (10, 20));
        assert_eq!(second.position(), (0, 0));
    }

    #[test]
    fn test_midget_stats() {
        let car = CarFactory::new().get_race_car("Midget").unwrap();
        assert_eq!(car.speed, 140);
        assert_eq!(car.horse_power, 400);
    }

    #[test]
    fn test_unsupported_car_type() {
        let mut factory = CarFactory::new();
        assert!(matches!(
            RaceCarClient::new(&mut factory, "Formula"),
            Err(PatternError::UnsupportedCarType(key)) if key == "Formula"
        ));
        assert_eq!(factory.instances_created(), 0);
    }
}
