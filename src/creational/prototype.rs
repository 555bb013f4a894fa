// Prototype: `Clone` gives an equal but independent copy.

use std::any::type_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personal {
    pub name: String,
    pub age: u32,
    pub country: String,
    pub gender: Gender,
}

impl Personal {
    /// Copies the prototype, changing only the name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Type name plus address, to tell two equal values apart.
pub fn object_signature<T>(value: &T) -> String {
    format!("{}@{:p}", type_name::<T>(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emanuel() -> Personal {
        Personal {
            name: "Emanuel".to_string(),
            age: 20,
            country: "Brazil".to_string(),
            gender: Gender::Male,
        }
    }

    #[test]
    fn test_clone_is_equal_but_distinct() {
        let personal = emanuel();
        let clone = personal.clone();

        assert_eq!(personal, clone);
        assert!(!std::ptr::eq(&personal, &clone));
        assert_ne!(object_signature(&personal), object_signature(&clone));
    }

    #[test]
    fn test_clone_owns_its_strings() {
        let personal = emanuel();
        let clone = personal.clone();
        assert_ne!(personal.name.as_ptr(), clone.name.as_ptr());
    }

    #[test]
    fn test_with_name() {
        let personal = emanuel();
        let other = personal.with_name("Maria");

        assert_eq!(other.name, "Maria");
        assert_eq!(other.age, personal.age);
        assert_eq!(other.gender, Gender::Male);
    }

    #[test]
    fn test_signature_names_type() {
        assert!(object_signature(&emanuel()).contains("Personal@0x"));
    }
}
