use std::path::PathBuf;

pub const HELP: &str = "\
perintah:
  paste          tempel dari clipboard
  paste <file>   tempel berkas gambar
  click          klik area tempel
  copy           salin hasil
  save           simpan hasil ke .txt
  theme          ganti tema terang/gelap
  help           bantuan ini
  quit           keluar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Paste(Option<PathBuf>),
    Click,
    Copy,
    Save,
    Theme,
    Help,
    Quit,
}

/// Parse one input line; `None` for blank or unknown input
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "paste" | "tempel" | "v" => {
            Command::Paste((!rest.is_empty()).then(|| PathBuf::from(rest)))
        }
        "click" | "klik" => Command::Click,
        "copy" | "salin" => Command::Copy,
        "save" | "simpan" => Command::Save,
        "theme" | "tema" => Command::Theme,
        "help" | "bantuan" | "?" => Command::Help,
        "quit" | "exit" | "keluar" | "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}
