
// Lexer tests
mod tokenizer;
