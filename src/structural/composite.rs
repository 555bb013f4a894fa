// Composite: a container of equipment is priced like a single part.

pub trait Equipment {
    fn price(&self) -> u32;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    name: String,
    price: u32,
}

impl Part {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn processor() -> Self {
        Self::new("Processor", 1070)
    }

    pub fn hard_drive() -> Self {
        Self::new("Hard Drive", 250)
    }

    pub fn memory() -> Self {
        Self::new("Memory", 280)
    }
}

impl Equipment for Part {
    fn price(&self) -> u32 {
        self.price
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub struct Composite {
    name: String,
    children: Vec<Box<dyn Equipment>>,
}

impl Composite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn personal_computer() -> Self {
        Self::new("PC")
    }

    pub fn add(mut self, equipment: impl Equipment + 'static) -> Self {
        self.children.push(Box::new(equipment));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Equipment for Composite {
    // A composite has no price of its own.
    fn price(&self) -> u32 {
        self.children.iter().map(|c| c.price()).sum()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
