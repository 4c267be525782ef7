use std::collections::HashSet;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordpick_core::dictionary::sample_request::SampleRequest;
use wordpick_core::dictionary::sample_result::DiagnosticKind;
use wordpick_core::dictionary::source::SourceId;
use wordpick_core::dictionary::word_list::WordList;
use wordpick_core::dictionary::word_sampler::{LoadMode, WordSampler};

fn nz(n: usize) -> NonZeroUsize {
	NonZeroUsize::new(n).unwrap()
}

fn write(dir: &Path, name: &str, content: &[u8]) {
	fs::write(dir.join(name), content).unwrap();
}

fn words_of(dir: &Path, source: SourceId) -> HashSet<String> {
	WordList::load(dir, source).unwrap().words().iter().cloned().collect()
}

#[test]
fn draws_three_distinct_words_from_all() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "all.txt", b"word1\nword2\nword3\nword4\nword5");
	let pool = words_of(dir.path(), SourceId::All);

	let result = WordSampler::new(dir.path()).get_words(&SampleRequest::new(3));

	assert_eq!(result.len(), 3);
	assert_eq!(result.words().iter().collect::<HashSet<_>>().len(), 3);
	assert!(result.words().iter().all(|w| pool.contains(w)));
	assert!(!result.is_degraded());
}

#[test]
fn draws_four_words_across_two_length_files() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "5.txt", b"apple\nmango\nlemon");
	write(dir.path(), "6.txt", b"orange\ngrapes\nmelons");
	// Must never leak into a length-filtered request.
	write(dir.path(), "all.txt", b"intruder");

	let five = words_of(dir.path(), SourceId::Length(nz(5)));
	let six = words_of(dir.path(), SourceId::Length(nz(6)));

	for seed in 0..20 {
		let result = WordSampler::new(dir.path()).get_words_with_rng(
			&SampleRequest::new(4).with_lengths([nz(5), nz(6)]),
			&mut StdRng::seed_from_u64(seed),
		);

		assert_eq!(result.len(), 4);
		assert!(result.words().iter().all(|w| five.contains(w) || six.contains(w)));
		assert_eq!(result.words().iter().filter(|w| five.contains(*w)).count(), 2);
		assert!(result.diagnostics().is_empty());
	}
}

#[test]
fn missing_length_file_yields_nothing() {
	let dir = tempfile::tempdir().unwrap();

	let result = WordSampler::new(dir.path()).get_words(&SampleRequest::new(3).with_lengths([nz(999)]));

	assert!(result.is_empty());
	assert_eq!(result.diagnostics().len(), 1);
	assert_eq!(result.diagnostics()[0].kind(), &DiagnosticKind::Missing);
	assert_eq!(result.diagnostics()[0].source(), SourceId::Length(nz(999)));
}

#[test]
fn unreadable_file_yields_nothing() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "all.txt", &[0x77, 0x6f, 0xff, 0x0a, 0x64]);

	let result = WordSampler::new(dir.path()).get_words(&SampleRequest::new(3));

	assert!(result.is_empty());
	assert_eq!(result.diagnostics().len(), 1);
	assert!(matches!(result.diagnostics()[0].kind(), DiagnosticKind::ReadFailed { .. }));
}

#[test]
fn unfiltered_request_only_reads_all() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "all.txt", b"red\ngreen\nblue\n");
	write(dir.path(), "5.txt", b"other\n");

	let result = WordSampler::new(dir.path()).get_words(&SampleRequest::new(10).with_lengths(Vec::new()));

	let mut words = result.into_words();
	words.sort();
	assert_eq!(words, ["blue", "green", "red"]);
}

#[test]
fn count_zero_is_always_empty() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "all.txt", b"a\nb\n");
	write(dir.path(), "5.txt", b"apple\n");
	let sampler = WordSampler::new(dir.path());

	assert!(sampler.get_words(&SampleRequest::new(0)).is_empty());
	assert!(sampler.get_words(&SampleRequest::new(0).with_lengths([nz(5)])).is_empty());
}

#[test]
fn result_never_exceeds_count() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "2.txt", b"ab\ncd\nef\ngh\nij\nkl");
	write(dir.path(), "3.txt", b"abc\ndef\nghi\njkl\nmno\npqr");
	write(dir.path(), "4.txt", b"abcd\nefgh\nijkl");
	let sampler = WordSampler::new(dir.path()).with_load_mode(LoadMode::Parallel);
	let mut rng = StdRng::seed_from_u64(77);

	for count in 0..20 {
		let request = SampleRequest::new(count).with_lengths([nz(2), nz(3), nz(4)]);
		let result = sampler.get_words_with_rng(&request, &mut rng);
		let share = request.per_source_share();
		let available = share.min(6) + share.min(6) + share.min(3);
		assert!(result.len() <= count);
		assert_eq!(result.len(), count.min(available));
		assert_eq!(result.words().iter().collect::<HashSet<_>>().len(), result.len());
	}
}

#[test]
fn seeded_runs_are_reproducible() {
	let dir = tempfile::tempdir().unwrap();
	write(dir.path(), "all.txt", b"north\nsouth\neast\nwest\nup\ndown\nleft\nright");
	let sampler = WordSampler::new(dir.path());

	let first = sampler.get_words_with_rng(&SampleRequest::new(4), &mut StdRng::seed_from_u64(5));
	let second = sampler.get_words_with_rng(&SampleRequest::new(4), &mut StdRng::seed_from_u64(5));
	assert_eq!(first, second);
}

#[test]
fn invalid_raw_requests_are_rejected() {
	assert!(SampleRequest::from_raw(-3, &[]).is_err());
	assert!(SampleRequest::from_raw(3, &[-1]).is_err());
	assert!(SampleRequest::from_raw(3, &[0, 5]).is_err());
}
