//! Integration tests for the `gettextify` command.
//!
//! Each test drives `gettextify_lib::run` with a real command line, writes the MO file
//! into a temporary directory, and inspects the bytes on disk.

use camino::{Utf8Path, Utf8PathBuf};
use gettextify_lib::{Host, MoFile};
use std::fs;

/// Test host that captures output to in-memory buffers.
#[derive(Debug, Default)]
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
    (tmp, dir)
}

fn run(host: &mut TestHost, input: &Utf8Path, output: &Utf8Path, extra: &[&str]) -> gettextify_lib::Result<()> {
    let mut args = vec!["gettextify", input.as_str(), output.as_str(), "--color", "never", "--log-level", "none"];
    args.extend_from_slice(extra);
    gettextify_lib::run(host, args)
}

fn word(data: &[u8], index: usize) -> u32 {
    u32::from_le_bytes(data[index * 4..index * 4 + 4].try_into().unwrap())
}

#[test]
fn test_basic_table_produces_valid_mo() {
    let (_tmp, dir) = temp_dir();
    let output = dir.join("messages.mo");

    let mut host = TestHost::default();
    run(&mut host, Utf8Path::new("tests/fixtures/basic.csv"), &output, &[]).unwrap();

    let data = fs::read(&output).unwrap();
    assert_eq!(&data[..4], &[0xDE, 0x12, 0x04, 0x95]);
    assert_eq!(word(&data, 1), 0);
    assert_eq!(word(&data, 2), 3);
    assert_eq!(word(&data, 3), 28);
    assert_eq!(word(&data, 4), 28 + 8 * 3);
    assert_eq!(word(&data, 5), 0);
    assert_eq!(word(&data, 6), 28 + 16 * 3);

    let mo = MoFile::parse(data).unwrap();
    assert_eq!(mo.original(0), Some(&b""[..]));
    assert_eq!(mo.original(1), Some(&b"Goodbye"[..]));
    assert_eq!(mo.original(2), Some(&b"Hello"[..]));
    assert_eq!(mo.lookup(b"Hello"), Some("Привет".as_bytes()));
    assert_eq!(mo.lookup(b"Goodbye"), Some("До свидания".as_bytes()));

    let header = String::from_utf8(mo.header_entry().unwrap().to_vec()).unwrap();
    assert!(header.starts_with("Project-Id-Version: gettextify 1.0\n"));
    assert!(header.contains("Content-Type: text/plain; charset=UTF-8\n"));
    assert!(!header.contains("Language:"));

    let out = host.output_str();
    assert!(out.contains("Converting tests/fixtures/basic.csv to"));
    assert!(out.contains("Found 2 translation entries."));
    assert!(out.contains(&format!("MO file created successfully: {output}")));
    assert_eq!(host.exit_code, None);
}

#[test]
fn test_strings_are_terminated_and_tables_point_inside_file() {
    let (_tmp, dir) = temp_dir();
    let output = dir.join("quoted.mo");

    let mut host = TestHost::default();
    run(&mut host, Utf8Path::new("tests/fixtures/quoted.csv"), &output, &[]).unwrap();

    let data = fs::read(&output).unwrap();
    let count = word(&data, 2) as usize;
    let string_area = 28 + 16 * count;

    let mut previous_end = string_area;
    for table in [word(&data, 3) as usize, word(&data, 4) as usize] {
        for index in 0..count {
            let length = word(&data, table / 4 + index * 2) as usize;
            let offset = word(&data, table / 4 + index * 2 + 1) as usize;

            assert_eq!(offset, previous_end, "strings are laid out back to back");
            assert_eq!(data[offset + length], 0);
            previous_end = offset + length + 1;
        }
    }
    assert_eq!(previous_end, data.len());

    let mo = MoFile::parse(data).unwrap();
    assert_eq!(mo.lookup(b"She said \"Hello\""), Some("Она сказала \"Привет\"".as_bytes()));
    assert_eq!(mo.lookup(b"Open, then close"), Some("Открыть, затем закрыть".as_bytes()));
}

#[test]
fn test_header_only_table_yields_header_entry() {
    let (_tmp, dir) = temp_dir();
    let input = dir.join("empty.csv");
    let output = dir.join("empty.mo");
    fs::write(&input, "msgid,msgstr\n").unwrap();

    let mut host = TestHost::default();
    run(&mut host, &input, &output, &[]).unwrap();

    let mo = MoFile::parse(fs::read(&output).unwrap()).unwrap();
    assert_eq!(mo.len(), 1);
    assert!(mo.header_entry().is_some());
    assert!(host.output_str().contains("Found 0 translation entries."));
}

#[test]
fn test_custom_header_row_is_kept_verbatim() {
    let (_tmp, dir) = temp_dir();
    let input = dir.join("custom.csv");
    let output = dir.join("custom.mo");
    fs::write(&input, "msgid,msgstr\nzeta,z\n,custom\nalpha,a\n").unwrap();

    let mut host = TestHost::default();
    run(&mut host, &input, &output, &["--project-id", "Ignored 9.9"]).unwrap();

    let mo = MoFile::parse(fs::read(&output).unwrap()).unwrap();
    assert_eq!(mo.len(), 3);
    assert_eq!(mo.header_entry(), Some(&b"custom"[..]));
    assert_eq!(mo.original(1), Some(&b"alpha"[..]));
    assert_eq!(mo.original(2), Some(&b"zeta"[..]));
}

#[test]
fn test_semicolon_delimiter() {
    let (_tmp, dir) = temp_dir();
    let output = dir.join("semicolon.mo");

    let mut host = TestHost::default();
    run(&mut host, Utf8Path::new("tests/fixtures/semicolon.csv"), &output, &["--delimiter", ";"]).unwrap();

    let mo = MoFile::parse(fs::read(&output).unwrap()).unwrap();
    assert_eq!(mo.len(), 4);
    assert_eq!(mo.lookup(b"Save"), Some("Сохранить".as_bytes()));
    assert!(host.output_str().contains("Found 3 translation entries."));
}

#[test]
fn test_metadata_flags_reach_header() {
    let (_tmp, dir) = temp_dir();
    let output = dir.join("meta.mo");

    let mut host = TestHost::default();
    run(
        &mut host,
        Utf8Path::new("tests/fixtures/basic.csv"),
        &output,
        &[
            "--project-id",
            "MyApp 2.0",
            "--bugs-to",
            "bugs@example.com",
            "--translator",
            "Anna <anna@example.com>",
            "--team",
            "Russian <ru@example.com>",
            "--language",
            "ru",
            "--charset",
            "KOI8-R",
            "--transfer-encoding",
            "binary",
        ],
    )
    .unwrap();

    let mo = MoFile::parse(fs::read(&output).unwrap()).unwrap();
    let header = String::from_utf8(mo.header_entry().unwrap().to_vec()).unwrap();

    for line in [
        "Project-Id-Version: MyApp 2.0\n",
        "Report-Msgid-Bugs-To: bugs@example.com\n",
        "Last-Translator: Anna <anna@example.com>\n",
        "Language-Team: Russian <ru@example.com>\n",
        "Language: ru\n",
        "MIME-Version: 1.0\n",
        "Content-Type: text/plain; charset=KOI8-R\n",
        "Content-Transfer-Encoding: binary\n",
    ] {
        assert!(header.contains(line), "missing {line:?} in {header:?}");
    }
}

#[test]
fn test_config_file_supplies_defaults_and_flags_win() {
    let (_tmp, dir) = temp_dir();
    let config = dir.join("settings.toml");
    let output = dir.join("config.mo");
    fs::write(&config, "delimiter = \";\"\n\n[header]\nlanguage = \"de\"\nlast_translator = \"Config Person\"\n").unwrap();

    let mut host = TestHost::default();
    run(
        &mut host,
        Utf8Path::new("tests/fixtures/semicolon.csv"),
        &output,
        &["--config", config.as_str(), "--language", "ru"],
    )
    .unwrap();

    let mo = MoFile::parse(fs::read(&output).unwrap()).unwrap();
    assert_eq!(mo.len(), 4);

    let header = String::from_utf8(mo.header_entry().unwrap().to_vec()).unwrap();
    assert!(header.contains("Language: ru\n"));
    assert!(header.contains("Last-Translator: Config Person\n"));
}

#[test]
fn test_missing_input_fails_without_output() {
    let (_tmp, dir) = temp_dir();
    let output = dir.join("never.mo");

    let mut host = TestHost::default();
    let result = run(&mut host, &dir.join("does-not-exist.csv"), &output, &[]);

    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("error:"));
    assert!(!output.exists());
}

#[test]
fn test_nested_output_directory_is_created() {
    let (_tmp, dir) = temp_dir();
    let output = dir.join("locale/ru/LC_MESSAGES/app.mo");

    let mut host = TestHost::default();
    run(&mut host, Utf8Path::new("tests/fixtures/basic.csv"), &output, &[]).unwrap();

    assert!(output.is_file());
    assert!(host.output_str().contains(&format!("Created directory: {}", dir.join("locale/ru/LC_MESSAGES"))));
}

#[test]
fn test_existing_output_is_replaced() {
    let (_tmp, dir) = temp_dir();
    let output = dir.join("messages.mo");
    fs::write(&output, vec![0xAA_u8; 4096]).unwrap();

    let mut host = TestHost::default();
    run(&mut host, Utf8Path::new("tests/fixtures/basic.csv"), &output, &[]).unwrap();

    let data = fs::read(&output).unwrap();
    assert!(data.len() < 4096);
    assert!(MoFile::parse(data).is_ok());
}
