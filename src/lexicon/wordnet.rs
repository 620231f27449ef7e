// WordNet database reader.
//
// Reads the standard WordNet 3.0 `dict/` layout: for each part of speech an
// index file (lemma -> ordered synset offsets), a data file (synset offset ->
// lemma names) and an exception list (irregular form -> base forms).
//
// Only the fields the normalizer needs are kept in memory: pointers, verb
// frames and glosses are skipped while parsing.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::morphy;
use super::traits::{Lexicon, PartOfSpeech, Synset};

/// Where a loaded lexicon came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// The small WordNet subset compiled into the binary.
    Bundled,
    /// A WordNet `dict/` directory on disk.
    Directory(PathBuf),
}

impl fmt::Display for LexiconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconSource::Bundled => write!(f, "bundled subset"),
            LexiconSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Raw contents of the three files WordNet keeps per part of speech.
pub struct PosFiles<'a> {
    pub index: &'a str,
    pub data: &'a str,
    pub exceptions: &'a str,
}

/// Entry counts, for `plagiscan status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconStats {
    pub lemmas: usize,
    pub synsets: usize,
    pub exceptions: usize,
}

#[derive(Default)]
struct PosTable {
    /// lemma -> synset offsets in sense order
    index: HashMap<String, Vec<u64>>,
    /// synset offset -> lemma names in dictionary order
    synsets: HashMap<u64, Vec<String>>,
    /// inflected form -> irregular base forms
    exceptions: HashMap<String, Vec<String>>,
}

/// An in-memory WordNet lexicon.
pub struct WordNet {
    source: LexiconSource,
    tables: [PosTable; 4],
}

impl WordNet {
    /// Load a WordNet `dict/` directory.
    ///
    /// Index and data files are required for all four parts of speech;
    /// a missing exception list is treated as empty.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            anyhow::bail!(
                "WordNet directory not found: {}\n\
                 Set WORDNET_DIR to a WordNet 3.0 `dict` directory, or unset it to use the bundled lexicon.",
                dir.display()
            );
        }

        let mut contents = Vec::with_capacity(PartOfSpeech::ALL.len());
        for pos in PartOfSpeech::ALL {
            let suffix = pos.file_suffix();
            let index = read_required(&dir.join(format!("index.{suffix}")))?;
            let data = read_required(&dir.join(format!("data.{suffix}")))?;
            let exc_path = dir.join(format!("{suffix}.exc"));
            let exceptions = if exc_path.exists() {
                read_required(&exc_path)?
            } else {
                debug!(path = %exc_path.display(), "No exception list, continuing without it");
                String::new()
            };
            contents.push((pos, index, data, exceptions));
        }

        let files = contents.iter().map(|(pos, index, data, exceptions)| {
            (
                *pos,
                PosFiles {
                    index,
                    data,
                    exceptions,
                },
            )
        });
        let wordnet = Self::parse(LexiconSource::Directory(dir.to_path_buf()), files)?;

        let stats = wordnet.stats();
        info!(
            dir = %dir.display(),
            lemmas = stats.lemmas,
            synsets = stats.synsets,
            "Loaded WordNet"
        );
        Ok(wordnet)
    }

    /// Build a lexicon from already-read file contents.
    pub fn parse<'a, I>(source: LexiconSource, files: I) -> Result<Self>
    where
        I: IntoIterator<Item = (PartOfSpeech, PosFiles<'a>)>,
    {
        let mut tables: [PosTable; 4] = Default::default();

        for (pos, files) in files {
            let suffix = pos.file_suffix();
            let table = &mut tables[pos.slot()];

            for (line_no, line) in content_lines(files.index) {
                let (lemma, offsets) = parse_index_line(line)
                    .with_context(|| format!("index.{suffix} line {line_no}: malformed entry"))?;
                table.index.insert(lemma, offsets);
            }

            for (line_no, line) in content_lines(files.data) {
                let (offset, lemmas) = parse_data_line(line)
                    .with_context(|| format!("data.{suffix} line {line_no}: malformed synset"))?;
                table.synsets.insert(offset, lemmas);
            }

            for (_, line) in content_lines(files.exceptions) {
                let mut fields = line.split_whitespace();
                if let Some(inflected) = fields.next() {
                    let bases: Vec<String> = fields.map(str::to_string).collect();
                    if !bases.is_empty() {
                        table.exceptions.insert(inflected.to_string(), bases);
                    }
                }
            }
        }

        Ok(Self { source, tables })
    }

    pub fn source(&self) -> &LexiconSource {
        &self.source
    }

    pub fn stats(&self) -> LexiconStats {
        self.tables.iter().fold(LexiconStats::default(), |acc, t| LexiconStats {
            lemmas: acc.lemmas + t.index.len(),
            synsets: acc.synsets + t.synsets.len(),
            exceptions: acc.exceptions + t.exceptions.len(),
        })
    }

    /// Index offsets with no matching synset in the data file. A full
    /// WordNet install has none; a truncated copy loses senses silently
    /// without this check.
    pub fn dangling_offsets(&self) -> Vec<(PartOfSpeech, u64)> {
        let mut dangling: Vec<(PartOfSpeech, u64)> = PartOfSpeech::ALL
            .into_iter()
            .flat_map(|pos| {
                let table = self.table(pos);
                table
                    .index
                    .values()
                    .flatten()
                    .filter(move |offset| !table.synsets.contains_key(*offset))
                    .map(move |offset| (pos, *offset))
            })
            .collect();
        dangling.sort_by_key(|(pos, offset)| (pos.slot(), *offset));
        dangling.dedup();
        dangling
    }

    fn table(&self, pos: PartOfSpeech) -> &PosTable {
        &self.tables[pos.slot()]
    }

    /// Synsets of `word` in lookup order, without materializing lemma lists.
    fn synset_refs<'s>(&'s self, word: &str) -> impl Iterator<Item = (PartOfSpeech, u64, &'s [String])> + 's {
        let word = word.to_lowercase();
        PartOfSpeech::ALL.into_iter().flat_map(move |pos| {
            let table = self.table(pos);
            self.base_forms(&word, pos)
                .into_iter()
                .flat_map(move |form| table.index.get(&form).cloned().unwrap_or_default())
                .filter_map(move |offset| {
                    table
                        .synsets
                        .get(&offset)
                        .map(|lemmas| (pos, offset, lemmas.as_slice()))
                })
        })
    }
}

impl Lexicon for WordNet {
    fn base_forms(&self, word: &str, pos: PartOfSpeech) -> Vec<String> {
        let table = self.table(pos);
        morphy::base_forms(
            word,
            pos,
            table.exceptions.get(word).map(Vec::as_slice),
            |form| table.index.contains_key(form),
        )
    }

    fn synsets(&self, word: &str) -> Vec<Synset> {
        self.synset_refs(word)
            .map(|(pos, offset, lemmas)| Synset {
                pos,
                offset,
                lemmas: lemmas.to_vec(),
            })
            .collect()
    }

    fn first_synonym(&self, word: &str) -> Option<String> {
        self.synset_refs(word)
            .find_map(|(_, _, lemmas)| lemmas.first().cloned())
    }
}

fn read_required(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Non-empty lines with 1-based line numbers, skipping the license header
/// (WordNet prefixes those lines with two spaces).
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.starts_with(' ') && !line.trim().is_empty())
}

/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt offset...`
fn parse_index_line(line: &str) -> Result<(String, Vec<u64>)> {
    let mut fields = line.split_whitespace();
    let lemma = fields.next().context("missing lemma")?.to_string();
    let pos = fields.next().context("missing part of speech")?;
    PartOfSpeech::from_tag(pos).with_context(|| format!("unknown part of speech {pos:?}"))?;

    let synset_cnt: usize = next_number(&mut fields, "synset_cnt")?;
    let p_cnt: usize = next_number(&mut fields, "p_cnt")?;
    for _ in 0..p_cnt {
        fields.next().context("missing pointer symbol")?;
    }
    let _sense_cnt: usize = next_number(&mut fields, "sense_cnt")?;
    let _tagsense_cnt: usize = next_number(&mut fields, "tagsense_cnt")?;

    let offsets = (0..synset_cnt)
        .map(|_| next_number(&mut fields, "synset_offset"))
        .collect::<Result<Vec<u64>>>()?;

    Ok((lemma, offsets))
}

/// `offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] ...`
///
/// `w_cnt` is two hexadecimal digits. Adjective lemmas may carry a syntactic
/// marker such as `(a)` or `(ip)`, which is stripped.
fn parse_data_line(line: &str) -> Result<(u64, Vec<String>)> {
    let mut fields = line.split_whitespace();
    let offset: u64 = next_number(&mut fields, "synset_offset")?;
    fields.next().context("missing lex_filenum")?;
    let ss_type = fields.next().context("missing ss_type")?;
    PartOfSpeech::from_tag(ss_type).with_context(|| format!("unknown ss_type {ss_type:?}"))?;

    let w_cnt_raw = fields.next().context("missing w_cnt")?;
    let w_cnt = usize::from_str_radix(w_cnt_raw, 16)
        .with_context(|| format!("w_cnt {w_cnt_raw:?} is not hexadecimal"))?;

    let mut lemmas = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        let word = fields.next().context("missing word")?;
        fields.next().context("missing lex_id")?;
        lemmas.push(strip_marker(word).to_string());
    }
    if lemmas.is_empty() {
        anyhow::bail!("synset {offset} has no words");
    }

    Ok((offset, lemmas))
}

fn strip_marker(word: &str) -> &str {
    match word.find('(') {
        Some(pos) if word.ends_with(')') => &word[..pos],
        _ => word,
    }
}

fn next_number<'a, T, I>(fields: &mut I, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    I: Iterator<Item = &'a str>,
{
    let raw = fields.next().with_context(|| format!("missing {name}"))?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("{name} {raw:?} is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_NOUN: &str = "  1 This software and database is being provided\n\
car n 2 3 @ ~ + 2 2 02958343 02959942 \n\
auto n 1 2 @ ~ 1 1 02958343 \n\
child n 1 1 @ 1 1 09917593 \n";

    const DATA_NOUN: &str = "  1 This software and database is being provided\n\
02958343 06 n 05 car 0 auto 0 automobile 0 machine 6 motorcar 0 000 | a motor vehicle\n\
02959942 06 n 04 car 1 railcar 0 railway_car 0 railroad_car 0 000 | a wheeled vehicle\n\
09917593 18 n 02 child 0 kid 0 000 | a young person\n";

    const INDEX_ADJ: &str = "big a 1 0 1 1 01382086 \n";
    const DATA_ADJ: &str = "01382086 00 a 02 large(a) 0 big 0 000 | above average in size\n";

    fn sample() -> WordNet {
        WordNet::parse(
            LexiconSource::Bundled,
            [
                (
                    PartOfSpeech::Noun,
                    PosFiles {
                        index: INDEX_NOUN,
                        data: DATA_NOUN,
                        exceptions: "children child\n",
                    },
                ),
                (
                    PartOfSpeech::Adjective,
                    PosFiles {
                        index: INDEX_ADJ,
                        data: DATA_ADJ,
                        exceptions: "",
                    },
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_parse_skips_license_header() {
        let stats = sample().stats();
        assert_eq!(stats.lemmas, 4);
        assert_eq!(stats.synsets, 4);
        assert_eq!(stats.exceptions, 1);
    }

    #[test]
    fn test_synsets_in_sense_order() {
        let wn = sample();
        let synsets = wn.synsets("car");
        assert_eq!(synsets.len(), 2);
        assert_eq!(synsets[0].offset, 2958343);
        assert_eq!(synsets[1].lemmas[1], "railcar");
    }

    #[test]
    fn test_adjective_marker_stripped() {
        let wn = sample();
        assert_eq!(wn.first_synonym("big").as_deref(), Some("large"));
    }

    #[test]
    fn test_plural_and_exception_lookup() {
        let wn = sample();
        assert_eq!(wn.lemmatize("cars"), "car");
        assert_eq!(wn.lemmatize("children"), "child");
        assert_eq!(wn.lemmatize("zebras"), "zebras");
    }

    #[test]
    fn test_synset_lookup_is_case_insensitive() {
        let wn = sample();
        assert_eq!(wn.first_synonym("AUTO").as_deref(), Some("car"));
    }

    #[test]
    fn test_malformed_index_line_errors() {
        let result = WordNet::parse(
            LexiconSource::Bundled,
            [(
                PartOfSpeech::Noun,
                PosFiles {
                    index: "car n two 0 1 1 02958343\n",
                    data: "",
                    exceptions: "",
                },
            )],
        );
        let err = format!("{:#}", result.err().unwrap());
        assert!(err.contains("index.noun line 1"), "unexpected error: {err}");
    }

    #[test]
    fn test_load_missing_directory_errors() {
        let result = WordNet::load(Path::new("/nonexistent/wordnet/dict"));
        assert!(result.is_err());
    }
}
