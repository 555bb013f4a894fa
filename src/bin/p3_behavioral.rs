// Pattern 3: Behavioral Patterns - Chain of Responsibility, Command, Listener, Mediator,
// Memento, State, Strategy, Visitor
// Run with: cargo run --bin p3_behavioral [-- pattern ...]

use std::env;
use std::io;
use std::rc::Rc;

use colored::Colorize;
use design_patterns::behavioral::chain_of_responsibility::{
    AuthenticationHeader, BodyPayload, ContentTypeHeader, HeadersChain,
};
use design_patterns::behavioral::command::{CommandProcessor, OrderAddCommand, OrderPayCommand};
use design_patterns::behavioral::listener::TextView;
use design_patterns::behavioral::mediator::{ChatMediator, ChatUser};
use design_patterns::behavioral::memento::{CareTaker, Originator};
use design_patterns::behavioral::state::AuthorizationPresenter;
use design_patterns::behavioral::strategy::{LowerCaseFormatter, Printer, UpperCaseFormatter};
use design_patterns::behavioral::visitor::{
    total_cost, Contract, FixedPriceContract, MonthlyCostReportVisitor, SupportContract,
    TimeAndMaterialsContract, YearlyReportVisitor,
};
use design_patterns::Result;

const PATTERNS: [&str; 8] = [
    "chain",
    "command",
    "listener",
    "mediator",
    "memento",
    "state",
    "strategy",
    "visitor",
];

fn chain_example() -> Result<()> {
    let body: Rc<dyn HeadersChain> =
        Rc::new(BodyPayload::new("Body:\n{\n\"username\"=\"dbacinski\"\n}"));
    let content_type: Rc<dyn HeadersChain> =
        Rc::new(ContentTypeHeader::new("json").with_next(body));
    let authentication =
        AuthenticationHeader::new(Some("123456".to_string())).with_next(Rc::clone(&content_type));

    println!("{}", authentication.add_header("Headers with Authentication:\n")?);
    println!();
    println!("{}", content_type.add_header("Headers:\n")?);

    let unauthenticated = AuthenticationHeader::new(None).with_next(content_type);
    if let Err(err) = unauthenticated.add_header("Headers:\n") {
        println!("{}", err.to_string().yellow());
    }
    Ok(())
}

fn command_example() -> Result<()> {
    let mut processor = CommandProcessor::new()
        .add_to_queue(OrderAddCommand::new(1))
        .add_to_queue(OrderAddCommand::new(2))
        .add_to_queue(OrderPayCommand::new(2))
        .add_to_queue(OrderPayCommand::new(1));

    for line in processor.process_commands() {
        println!("{}", line);
    }
    Ok(())
}

fn listener_example() -> Result<()> {
    let mut text_view = TextView::new();
    text_view.set_listener(|old: &str, new: &str| {
        println!("Text is changed {} -> {}", old, new);
    });

    text_view.set_text("Lorem ipsum");
    text_view.set_text("dolor sit amet");
    Ok(())
}

fn mediator_example() -> Result<()> {
    let mediator = ChatMediator::new();
    let john = ChatUser::new(&mediator, "John");
    let alice = ChatUser::new(&mediator, "Alice");
    let bob = ChatUser::new(&mediator, "Bob");

    mediator
        .add_user(Rc::clone(&alice))
        .add_user(Rc::clone(&bob))
        .add_user(Rc::clone(&john));

    println!("{}: Sending Message= Hi everyone!", john.name());
    john.send("Hi everyone!")?;

    for user in [&alice, &bob, &john] {
        for msg in user.received() {
            println!("{}: Message received: {}", user.name(), msg);
        }
    }
    Ok(())
}

fn memento_example() -> Result<()> {
    let mut originator = Originator::new("initial state");
    let mut care_taker = CareTaker::new();
    care_taker.save_state(originator.create_memento());

    originator.state = "State #1".to_string();
    originator.state = "State #2".to_string();
    care_taker.save_state(originator.create_memento());

    originator.state = "State #3".to_string();
    println!("Current State: {}", originator.state);

    originator.restore(care_taker.restore(1)?);
    println!("Second saved state: {}", originator.state);

    originator.restore(care_taker.restore(0)?);
    println!("First saved state: {}", originator.state);

    if let Err(err) = care_taker.restore(9) {
        println!("{}", err.to_string().yellow());
    }
    Ok(())
}

fn state_example() -> Result<()> {
    let mut presenter = AuthorizationPresenter::new();

    presenter.login_user("admin");
    println!("{}", presenter);

    presenter.logout_user();
    println!("{}", presenter);
    Ok(())
}

fn strategy_example() -> Result<()> {
    let input = "LOREM ipsum DOLOR sit amet";
    let mut stdout = io::stdout();

    Printer::new(LowerCaseFormatter).print_string(input, &mut stdout)?;
    Printer::new(UpperCaseFormatter).print_string(input, &mut stdout)?;
    Printer::new(|s: &str| format!("Prefix: {s}")).print_string(input, &mut stdout)?;
    Ok(())
}

fn visitor_example() -> Result<()> {
    let projects: Vec<Contract> = vec![
        FixedPriceContract { cost_per_year: 10000 }.into(),
        SupportContract { cost_per_month: 500 }.into(),
        TimeAndMaterialsContract { cost_per_hour: 10, hours: 150 }.into(),
        TimeAndMaterialsContract { cost_per_hour: 50, hours: 50 }.into(),
    ];

    println!("Monthly cost: {}", total_cost(&projects, &MonthlyCostReportVisitor));
    println!("Yearly cost: {}", total_cost(&projects, &YearlyReportVisitor));
    Ok(())
}

fn run(pattern: &str) -> Result<()> {
    match pattern {
        "chain" => chain_example(),
        "command" => command_example(),
        "listener" => listener_example(),
        "mediator" => mediator_example(),
        "memento" => memento_example(),
        "state" => state_example(),
        "strategy" => strategy_example(),
        "visitor" => visitor_example(),
        _ => unreachable!("filtered by PATTERNS"),
    }
}

fn main() {
    println!("{}", "Pattern 3: Behavioral Patterns".bold());
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
