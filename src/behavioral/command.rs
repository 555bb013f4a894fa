// Command: queue order operations now, run them later in arrival order.

pub trait OrderCommand {
    fn execute(&self) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct OrderAddCommand {
    id: u64,
}

impl OrderAddCommand {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl OrderCommand for OrderAddCommand {
    fn execute(&self) -> String {
        format!("Adding order with id: {}", self.id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrderPayCommand {
    id: u64,
}

impl OrderPayCommand {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl OrderCommand for OrderPayCommand {
    fn execute(&self) -> String {
        format!("Paying for order with id: {}", self.id)
    }
}

#[derive(Default)]
pub struct CommandProcessor {
    queue: Vec<Box<dyn OrderCommand>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_queue(mut self, command: impl OrderCommand + 'static) -> Self {
        self.queue.push(Box::new(command));
        self
    }

    /// Runs every queued command in FIFO order and empties the queue.
    pub fn process_commands(&mut self) -> Vec<String> {
        self.queue.drain(..).map(|command| command.execute()).collect()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_run_in_order() {
        let mut processor = CommandProcessor::new()
            .add_to_queue(OrderAddCommand::new(1))
            .add_to_queue(OrderAddCommand::new(2))
            .add_to_queue(OrderPayCommand::new(2))
            .add_to_queue(OrderPayCommand::new(1));

        assert_eq!(processor.pending(), 4);
        assert_eq!(
            processor.process_commands(),
            [
                "Adding order with id: 1",
                "Adding order with id: 2",
                "Paying for order with id: 2",
                "Paying for order with id: 1",
            ]
        );
    }

    #[test]
    fn test_queue_cleared_after_processing() {
        let mut processor = CommandProcessor::new().add_to_queue(OrderAddCommand::new(7));
        processor.process_commands();

        assert_eq!(processor.pending(), 0);
        assert!(processor.process_commands().is_empty());
    }
}
