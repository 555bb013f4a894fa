// Pattern 1: Creational Patterns - Abstract Factory, Builder, Factory Method, Prototype, Singleton
// Run with: cargo run --bin p1_creational [-- pattern ...]

use std::env;
use std::io::Write;
use std::path::Path;

use colored::Colorize;
use design_patterns::creational::abstract_factory::{create_factory, ApplePlant, OrangePlant};
use design_patterns::creational::builder::dialog;
use design_patterns::creational::factory_method::{Country, CurrencyFactory};
use design_patterns::creational::prototype::{object_signature, Gender, Personal};
use design_patterns::creational::singleton::{DummySingleton, PrinterDriver};
use design_patterns::Result;

const PATTERNS: [&str; 5] = [
    "abstract_factory",
    "builder",
    "factory_method",
    "prototype",
    "singleton",
];

fn abstract_factory_example() -> Result<()> {
    for factory in [create_factory::<OrangePlant>()?, create_factory::<ApplePlant>()?] {
        let plant = factory.make_plant();
        println!("Created plant: {:?} ({})", plant, plant.name());
    }
    Ok(())
}

fn builder_example() -> Result<()> {
    builder_example_in(&env::temp_dir())
}

// The image is a NamedTempFile, so it is removed on every return path.
fn builder_example_in(dir: &Path) -> Result<()> {
    let mut image = tempfile::Builder::new()
        .prefix("dialog-image-")
        .suffix(".jpg")
        .tempfile_in(dir)?;
    image.write_all(&[0xFF, 0xD8, 0xFF, 0xE0])?;
    let image_path = image.path().to_path_buf();

    let built = dialog(|d| {
        d.title(|t| t.text = "Dialog Title".into());
        d.message(|m| {
            m.text = "Dialog Message".into();
            m.color = "#333333".into();
        });
        d.image(|| image_path);
    })?;

    for call in built.calls() {
        println!("  {}", call);
    }
    println!("{}", built.show());
    Ok(())
}

fn factory_method_example() -> Result<()> {
    for name in ["Greece", "USA", "Canada", "UK"] {
        let country: Country = name.parse()?;
        let code = CurrencyFactory::currency_for_country(country)
            .map(|c| c.code)
            .unwrap_or("No Currency Code Available");
        println!("{} currency: {}", country, code);
    }

    if let Err(err) = "Atlantis".parse::<Country>() {
        println!("{}", err.to_string().yellow());
    }
    Ok(())
}

fn prototype_example() -> Result<()> {
    let personal = Personal {
        name: "Emanuel".to_string(),
        age: 20,
        country: "Brazil".to_string(),
        gender: Gender::Male,
    };
    let clone = personal.clone();

    println!("original: {:?} at {}", personal, object_signature(&personal));
    println!("clone:    {:?} at {}", clone, object_signature(&clone));
    println!("equal: {}, same object: {}", personal == clone, std::ptr::eq(&personal, &clone));
    Ok(())
}

fn singleton_example() -> Result<()> {
    let first = PrinterDriver::instance().print();
    let second = PrinterDriver::instance().print();
    println!("{}", first.describe());
    println!("{}", second.describe());
    println!(
        "Same instance: {} (initialised {} time(s))",
        std::ptr::eq(first, second),
        PrinterDriver::initialisations()
    );

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| DummySingleton::instance().describe()))
        .collect();
    for handle in handles {
        match handle.join() {
            Ok(line) => println!("  thread: {}", line),
            Err(_) => println!("{}", "  thread panicked".red()),
        }
    }
    println!("Dummy initialised {} time(s)", DummySingleton::initialisations());
    Ok(())
}

fn run(pattern: &str) -> Result<()> {
    match pattern {
        "abstract_factory" => abstract_factory_example(),
        "builder" => builder_example(),
        "factory_method" => factory_method_example(),
        "prototype" => prototype_example(),
        "singleton" => singleton_example(),
        _ => unreachable!("filtered by PATTERNS"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_example_leaves_no_image_behind() {
        let dir = tempfile::tempdir().unwrap();
        builder_example_in(dir.path()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_every_pattern_runs() {
        for pattern in PATTERNS {
            run(pattern).unwrap();
        }
    }
}

fn main() {
    println!("{}", "Pattern 1: Creational Patterns".bold());
    println!("===============================\n");

    let selected: Vec<String> = env::args().skip(1).collect();
    for name in &selected {
        if !PATTERNS.contains(&name.as_str()) {
            println!("{} {}", "Unknown pattern:".red(), name);
        }
    }

    for pattern in PATTERNS {
        if !selected.is_empty() && !selected.iter().any(|s| s == pattern) {
            continue;
        }
        println!("=== {} ===", pattern.cyan());
        if let Err(err) = run(pattern) {
            println!("{} {}", "error:".red().bold(), err);
        }
        println!();
    }
}
