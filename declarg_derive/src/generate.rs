mod choices;
mod parameter;
mod parser;
