use rs_predict_core::model::predictor::Predictor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Show the "retrieving text..." / "generating transitions..." notices
    // by default; RUST_LOG still overrides the filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Build the HTTP client and the compiled tokenizer once
    let predictor = Predictor::new()?;

    // Fetch one document and strip its markup. Pliny the Elder's Natural
    // History is a conveniently large single page
    let raw = predictor.fetch_text("http://www.masseiana.org/pliny.htm")?;

    // Two words of context predicting the single next word
    let table = predictor.analyze(&raw, 2, 1)?;

    // Test invalid window sizes
    match predictor.analyze("whale oil", 0, 1) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("back 0 is invalid, must be at least 1"),
    }

    println!("{} distinct contexts of {} tokens", table.len(), table.back());

    // Show the busiest contexts with their three most frequent continuations.
    // Contexts with equal totals are ordered alphabetically so repeated runs
    // print the same report
    let mut entries: Vec<_> = table.iter().collect();
    entries.sort_by(|a, b| b.1.total().cmp(&a.1.total()).then_with(|| a.0.cmp(b.0)));

    for (context, state) in entries.into_iter().take(10) {
        let continuations: Vec<String> = state
            .ranked()
            .iter()
            .take(3)
            .map(|(continuation, count)| format!("{} ({})", continuation.join(" "), count))
            .collect();
        println!("{:>6}  {} -> {}", state.total(), context.join(" "), continuations.join(", "));
    }

    Ok(())
}
