use crate::parser::ParserError;

pub(crate) trait UserInterface {
    fn print_error(&self, error: &ParserError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, error: &ParserError) {
        eprintln!("error: '{error}'");
    }
}
