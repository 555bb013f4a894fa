// Pattern 2: Structural Patterns - Adapter, Composite, Decorator, Facade, Flyweight, Proxy
// Run with: cargo run --bin p2_structural [-- pattern ...]

use std::env;
use std::path::Path;
use std::rc::Rc;

use colored::Colorize;
use design_patterns::structural::adapter::{
    CelsiusTemperature, FahrenheitTemperature, Temperature,
};
use design_patterns::structural::composite::{Composite, Equipment, Part};
use design_patterns::structural::decorator::{
    CoffeeMachine, EnhancedCoffeeMachine, NormalCoffeeMachine,
};
use design_patterns::structural::facade::{User, UserRepository};
use design_patterns::structural::flyweight::{CarFactory, RaceCarClient};
use design_patterns::structural::proxy::{File, NormalFile, SecuredFile};
use design_patterns::Result;

const PATTERNS: [&str; 6] = [
    "adapter",
    "composite",
    "decorator",
    "facade",
    "flyweight",
    "proxy",
];

fn adapter_example() -> Result<()> {
    let celsius = CelsiusTemperature::shared(0.0);
    let mut fahrenheit = FahrenheitTemperature::new(Rc::clone(&celsius));

    celsius.borrow_mut().set_temperature(36.6);
    println!(
        "{} C -> {} F",
        celsius.borrow().temperature(),
        fahrenheit.temperature()
    );

    fahrenheit.set_temperature(100.0);
    println!(
        "{} F -> {} C",
        fahrenheit.temperature(),
        celsius.borrow().temperature()
    );
    Ok(())
}

fn composite_example() -> Result<()> {
    let pc = Composite::personal_computer()
        .add(Part::processor())
        .add(Part::hard_drive())
        .add(Part::memory());
    println!("{} with {} parts costs {}", pc.name(), pc.len(), pc.price());
    Ok(())
}

fn decorator_example() -> Result<()> {
    let machine = EnhancedCoffeeMachine::new(NormalCoffeeMachine);

    for step in machine.make_coffee_with_milk() {
        println!("  {}", step);
    }
    for step in machine.make_double_large_coffee() {
        println!("  {}", step);
    }
    println!("  {}", machine.make_small_coffee());
    Ok(())
}

fn facade_example() -> Result<()> {
    facade_example_in(&env::temp_dir())
}

// The preferences live in a TempDir that is deleted when it drops.
fn facade_example_in(dir: &Path) -> Result<()> {
    let prefs_dir = tempfile::Builder::new()
        .prefix("user-prefs-")
        .tempdir_in(dir)?;
    let path = prefs_dir.path().join("default.prefs");
    let mut repository = UserRepository::new(&path)?;

    repository.save(&User::new("dbacinski"))?;
    println!("Stored preferences in {}", path.display());
    println!("Found stored user: {:?}", repository.find_first());
    Ok(())
}

fn flyweight_example() -> Result<()> {
    let mut factory = CarFactory::new();
    let mut race_cars = Vec::new();
    for _ in 0..3 {
        race_cars.push(RaceCarClient::new(&mut factory, "Midget")?);
    }

    for (car, (x, y)) in race_cars.iter_mut().zip([(29, 3112), (39, 2002), (49, 1985)]) {
        println!("{}", car.move_car(x, y));
    }
    println!("Midget Car Instances: {}", factory.instances_created());

    if let Err(err) = RaceCarClient::new(&mut factory, "Formula") {
        println!("{}", err.to_string().yellow());
    }
    Ok(())
}

fn proxy_example() -> Result<()> {
    let mut secured_file = SecuredFile::new(NormalFile);

    match secured_file.read("readme.md") {
        Ok(line) => println!("{}", line),
        Err(err) => println!("{}", err.to_string().yellow()),
    }

    secured_file.set_password("secret");
    println!("{}", secured_file.read("readme.md")?);
    Ok(())
}

fn run(pattern: &str) -> Result<()> {
    match pattern {
        "adapter" => adapter_example(),
        "composite" => composite_example(),
        "decorator" => decorator_example(),
        "facade" => facade_example(),
        "flyweight" => flyweight_example(),
        "proxy" => proxy_example(),
        _ => unreachable!("filtered by PATTERNS"),
    }
}


fn main() {
    println!("{}", "Pattern 2: Structural Patterns".bold());
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
