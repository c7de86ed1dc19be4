use crate::error::MapError;

pub(crate) trait UserInterface {
    fn print_error(&self, error: &MapError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, error: &MapError) {
        eprintln!("Mapping error: {error}");
    }
}
