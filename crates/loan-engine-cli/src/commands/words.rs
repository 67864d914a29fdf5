use clap::Args;
use serde_json::{json, Value};

use loan_engine_core::words;

/// Arguments for Indian-system word formatting
#[derive(Args)]
pub struct WordsArgs {
    /// Amount in whole currency units
    pub amount: u64,
}

pub fn run_words(args: WordsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({
        "result": {
            "amount": args.amount,
            "grouped": words::group_indian_digits(args.amount),
            "words": words::to_indian_words(args.amount),
            "display": words::format_inr(args.amount),
        }
    }))
}
