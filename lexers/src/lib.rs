mod scanner;
mod math_tokenizer;

pub use scanner::Scanner;
pub use math_tokenizer::{tokenize, LexError, MathToken, MathTokenizer, Operator};
