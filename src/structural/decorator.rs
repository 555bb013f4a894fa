// Decorator: extend a coffee machine without touching it.

pub trait CoffeeMachine {
    fn make_small_coffee(&self) -> String;
    fn make_large_coffee(&self) -> String;
}

#[derive(Debug, Default)]
pub struct NormalCoffeeMachine;

impl CoffeeMachine for NormalCoffeeMachine {
    fn make_small_coffee(&self) -> String {
        "Normal: Making small coffee".to_string()
    }

    fn make_large_coffee(&self) -> String {
        "Normal: Making large coffee".to_string()
    }
}

pub struct EnhancedCoffeeMachine<M> {
    machine: M,
}

impl<M: CoffeeMachine> EnhancedCoffeeMachine<M> {
    pub fn new(machine: M) -> Self {
        Self { machine }
    }

    pub fn make_coffee_with_milk(&self) -> Vec<String> {
        vec![
            "Enhanced: Making coffee with milk".to_string(),
            self.machine.make_small_coffee(),
            "Enhanced: Adding milk".to_string(),
        ]
    }

    pub fn make_double_large_coffee(&self) -> Vec<String> {
        vec![
            "Enhanced: Making double large coffee".to_string(),
            self.machine.make_large_coffee(),
            self.machine.make_large_coffee(),
        ]
    }

    pub fn into_inner(self) -> M {
        self.machine
    }
}

// Plain delegation for everything the wrapped machine already does.
impl<M: CoffeeMachine> CoffeeMachine for EnhancedCoffeeMachine<M> {
    fn make_small_coffee(&self) -> String {
        self.machine.make_small_coffee()
    }

    fn make_large_coffee(&self) -> String {
        self.machine.make_large_coffee()
    }
}
