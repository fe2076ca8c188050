use clap::Parser;
use rpncalc::{DivisionMode, MathContext, UnaryFallback};

/// Evaluate infix arithmetic through Reverse Polish Notation.
/// Starts a REPL when no expression is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat an operator with a single operand as unary ('-' negates).
    #[arg(long)]
    legacy_unary: bool,

    /// Let division by zero produce inf/NaN instead of an error.
    #[arg(long)]
    ieee_division: bool,

    /// Also print the postfix form.
    #[arg(long)]
    rpn: bool,

    /// More logging on stderr, repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    expression: Vec<String>,
}

impl Args {
    fn context(&self) -> MathContext {
        let mut cx = MathContext::new();
        if self.legacy_unary {
            cx = cx.with_unary(UnaryFallback::Legacy);
        }
        if self.ieee_division {
            cx = cx.with_division(DivisionMode::Ieee);
        }
        cx
    }
}

mod repl {
    use rpncalc::{ExpressionError, MathContext, ShuntingParser};

    pub fn evalexpr(cx: &MathContext, input: &str, show_rpn: bool) -> Result<(), ExpressionError> {
        let expr = ShuntingParser::parse_str(input)?;
        let result = cx.eval(&expr)?;
        if show_rpn {
            println!("rpn: {}", expr);
        }
        match expr.to_infix() {
            Some(infix) => println!("{} = {}", infix, result),
            None => println!("{}", result),
        }
        Ok(())
    }
}

fn main() -> rustyline::Result<()> {
    let args = Args::parse();
    rpncalc::logger::init_with_level(rpncalc::logger::level_from_verbosity(args.verbose));
    let cx = args.context();

    if !args.expression.is_empty() {
        let input = args.expression.join(" ");
        if let Err(e) = repl::evalexpr(&cx, &input, args.rpn) {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            tracing::debug!(path = %path.display(), "no history yet");
        }
    }
    while let Ok(input) = rl.readline(">> ") {
        if input.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(input.as_str())?;
        if let Err(e) = repl::evalexpr(&cx, &input, args.rpn) {
            println!("error: {}", e);
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path)?;
    }
    Ok(())
}
