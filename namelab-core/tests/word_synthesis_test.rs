//! End-to-end coverage of the corpus-file-to-word path.

use std::io::Write;

use namelab_core::store::filter::LengthFilter;
use namelab_core::store::syllable_store::SyllableStore;
use namelab_core::synth::synthesizer::WordSynthesizer;
use namelab_core::synth::word_request::WordRequest;

const CORPUS: &[&str] = &[
	"a", "e", "ka", "lo", "mi", "na", "ri", "so", "bel", "dor", "fen", "tren",
];

fn corpus_file() -> tempfile::NamedTempFile {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	for syllable in CORPUS {
		writeln!(file, "{}", syllable).unwrap();
	}
	file.flush().unwrap();
	file
}

#[test]
fn store_builds_from_a_corpus_file() {
	let file = corpus_file();
	let store = SyllableStore::open(file.path()).unwrap();

	assert_eq!(store.record_count(), CORPUS.len());
	assert_eq!(store.record_width(), 4);
	for index in 0..store.record_count() {
		assert_eq!(store.get(index).unwrap().len(), 4);
	}
}

#[test]
fn sampled_syllables_come_from_the_corpus() {
	let file = corpus_file();
	let store = SyllableStore::open(file.path()).unwrap();

	for _ in 0..100 {
		let syllable = store.sample().unwrap();
		assert!(CORPUS.contains(&syllable.as_str()), "unknown '{}'", syllable);
	}
	for _ in 0..100 {
		let syllable = store.sample_with(&LengthFilter::at_most(2)).unwrap();
		assert!(syllable.chars().count() <= 2, "'{}' too long", syllable);
	}
}

#[test]
fn generated_words_meet_their_targets() {
	let file = corpus_file();
	let synthesizer = WordSynthesizer::new(SyllableStore::open(file.path()).unwrap());

	for target in 1..=12 {
		let request = WordRequest::new(target).unwrap();
		for _ in 0..10 {
			let word = synthesizer.generate(&request).unwrap();
			// One-char syllables exist, so normalized words hit the
			// target exactly
			assert_eq!(word.chars().count(), target, "'{}' vs {}", word, target);
			let mut chars = word.chars();
			assert!(chars.next().unwrap().is_uppercase());
			assert!(chars.all(|c| c.is_lowercase()));
		}
	}
}

#[test]
fn missing_corpus_file_is_an_io_error() {
	assert!(SyllableStore::open("no/such/corpus.txt").is_err());
}
