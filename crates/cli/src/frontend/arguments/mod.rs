mod parsed_args;
mod parser;

#[cfg(test)]
mod tests;

pub use parsed_args::ParsedArgs;
pub use parser::parse_args;
