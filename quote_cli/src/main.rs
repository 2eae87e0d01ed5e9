//! # PaintQuote CLI Application
//!
//! Terminal front end for the quote engine. Runs the conversational
//! assistant over stdin: answer its questions (or type a full sentence;
//! it extracts what it can) and get a priced quote back.

use std::io::{self, BufRead, Write};

use quote_core::calculations::simplified;
use quote_core::conversation::{parse_message, ContextField, ConversationContext};
use quote_core::format::{format_currency, format_currency_whole};
use quote_core::rates::RateBook;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{} ", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    let bytes = io::stdin().lock().read_line(&mut input).ok()?;
    if bytes == 0 {
        return None;
    }
    Some(input.trim().to_string())
}

fn main() {
    println!("PaintQuote CLI - Painting Quote Assistant");
    println!("=========================================");
    println!();
    println!("Answer the questions below, or describe the job in your own words.");
    println!("Type 'quit' to exit.");
    println!();

    let book = RateBook::default();
    let mut ctx = ConversationContext::default();
    let mut question = ContextField::ClientName.prompt().to_string();

    loop {
        let Some(line) = prompt_line(&question) else {
            return;
        };
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            return;
        }
        if line.is_empty() {
            continue;
        }

        let outcome = parse_message(&line, &ctx);
        if outcome.reset {
            println!();
            println!("Starting a fresh quote.");
            ctx = ConversationContext::default();
            question = outcome.next_question;
            continue;
        }

        ctx = ctx.merged(&outcome.extracted);
        if !outcome.is_complete {
            question = outcome.next_question;
            continue;
        }

        // Context complete: price it
        let input = match ctx.to_simplified_input() {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Could not build a quote: {}", e);
                return;
            }
        };
        match simplified::calculate(&input, &book) {
            Ok(quote) => {
                println!();
                println!("Quote for {}", ctx.client_name.as_deref().unwrap_or("customer"));
                if let Some(address) = &ctx.address {
                    println!("  {}", address);
                }
                println!("-----------------------------------------");
                println!(
                    "  {} / {} / {:.0} sqft",
                    input.project_type.display_name(),
                    input.paint_quality.display_name(),
                    input.sqft
                );
                println!("  Labor:      {}", format_currency(quote.breakdown.labor));
                println!("  Materials:  {}", format_currency(quote.breakdown.materials));
                println!("  Prep work:  {}", format_currency(quote.breakdown.prep_work));
                println!("  Markup:     {}", format_currency(quote.breakdown.markup));
                println!("-----------------------------------------");
                println!("  Total:      {}", format_currency_whole(quote.total));
            }
            Err(e) => eprintln!("Calculation failed: {}", e),
        }

        println!();
        println!("Say 'another quote' to start over, or 'quit' to exit.");
        question = String::from(">");
    }
}
