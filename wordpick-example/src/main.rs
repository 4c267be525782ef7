use std::num::NonZeroUsize;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordpick_core::dictionary::sample_request::SampleRequest;
use wordpick_core::dictionary::word_sampler::{LoadMode, WordSampler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Word lists live in "./dict": all.txt plus one <n>.txt file per word length
    let sampler = WordSampler::new("./dict");

    // List which word lists are available
    for source in sampler.list_sources()? {
        println!("Available: {}", source);
    }

    // Without lengths, words are drawn from all.txt
    let result = sampler.get_words(&SampleRequest::new(3));
    println!("Any length: {:?}", result.words());

    // With lengths, each <n>.txt file gets ceil(count / lengths) words,
    // then the pool is shuffled and trimmed to count
    let lengths = SampleRequest::parse_lengths("5,6")?;
    let result = sampler.get_words(&SampleRequest::new(4).with_lengths(lengths));
    println!("Five or six letters: {:?}", result.words());

    // A missing word list does not fail the request,
    // it only shows up in the diagnostics
    let missing = NonZeroUsize::new(999).ok_or("999 is not zero")?;
    let result = sampler.get_words(&SampleRequest::new(3).with_lengths([missing]));
    println!("Length 999: {:?}", result.words());
    for diagnostic in result.diagnostics() {
        println!("  {} -> {:?}", diagnostic.path().display(), diagnostic.kind());
    }

    // A seeded generator gives the same words on every run,
    // whether the lists are read sequentially or on worker threads
    let request = SampleRequest::from_raw(5, &[4, 5, 6])?;
    let sequential = sampler.get_words_with_rng(&request, &mut StdRng::seed_from_u64(42));
    let parallel = sampler
        .clone()
        .with_load_mode(LoadMode::Parallel)
        .get_words_with_rng(&request, &mut StdRng::seed_from_u64(42));
    println!("Seeded: {:?}", sequential.words());
    println!("Seeded (parallel): {:?}", parallel.words());

    // Negative counts and non-positive lengths are rejected
    match SampleRequest::from_raw(-1, &[]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {}", e),
    }
    match SampleRequest::from_raw(3, &[0]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
