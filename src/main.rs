//! kopron - 한글 발음/로마자 변환 명령줄 도구

use std::io::{self, BufRead};
use std::process;

use clap::Parser;

use kopron::config::load_hints;
use kopron::{RomanizeError, Romanizer, RuleHints, System};

#[derive(Parser)]
#[command(
    name = "kopron",
    about = "Korean pronunciation and romanization",
    allow_negative_numbers = true
)]
struct Cli {
    /// Target system: ph, rr, rrr, mc (mr), yr, ipa
    #[arg(short, long, default_value = "rr")]
    system: System,
    /// Print every system with its display name
    #[arg(long)]
    all: bool,
    /// JSON file with positional hints (flags below are added on top)
    #[arg(long)]
    hints: Option<String>,
    /// Long vowel positions
    #[arg(short = 'l', long = "long", value_delimiter = ',')]
    lengthening: Vec<i32>,
    /// Compound boundary positions (-1 = before the first syllable)
    #[arg(short = 'c', long = "compound", value_delimiter = ',')]
    compounding: Vec<i32>,
    /// Capitalize the first letter of romanizations
    #[arg(long)]
    capitalize: bool,
    /// Syllables whose initial becomes ㄴ
    #[arg(long = "nn", value_delimiter = ',')]
    nasal_insertion: Vec<i32>,
    /// Syllables with an inserted ㄴ/ㄹ
    #[arg(long = "ni", value_delimiter = ',')]
    n_insertion: Vec<i32>,
    /// Syllable whose ㅢ is also read ㅣ
    #[arg(long = "ui")]
    vowel_to_i: Option<i32>,
    /// Syllable whose ㅢ is also read ㅔ
    #[arg(long = "ui-e")]
    vowel_to_e: Option<i32>,
    /// Syllable whose final is also dropped
    #[arg(long = "nobc")]
    no_boundary_release: Option<i32>,
    /// Syllable whose final cluster is reduced
    #[arg(long = "bcred")]
    coda_restoration: Option<i32>,
    /// Syllable whose final ㅅ is also read ㄷ
    #[arg(long = "svar")]
    s_variant: Option<i32>,
    /// Syllable whose vowel is also iotated
    #[arg(long = "iot")]
    iotation: Option<i32>,
    /// Syllable whose iotated vowel is also simplified
    #[arg(long = "yeored")]
    yeo_reduction: Option<i32>,
    /// Text to convert (reads stdin lines when omitted)
    text: Vec<String>,
}

impl Cli {
    fn rule_hints(&self) -> Result<RuleHints, String> {
        let base = match &self.hints {
            Some(path) => load_hints(path).map_err(|e| format!("{}: {}", path, e))?,
            None => RuleHints::default(),
        };
        let mut hints = base
            .with_lengthening(self.lengthening.iter().copied())
            .with_compounding(self.compounding.iter().copied())
            .with_nasal_insertion(self.nasal_insertion.iter().copied())
            .with_n_insertion(self.n_insertion.iter().copied());
        if self.capitalize {
            hints = hints.with_capitalize(true);
        }
        let singles: [(Option<i32>, fn(RuleHints, i32) -> RuleHints); 7] = [
            (self.vowel_to_i, RuleHints::with_vowel_to_i),
            (self.vowel_to_e, RuleHints::with_vowel_to_e),
            (self.no_boundary_release, RuleHints::with_no_boundary_release),
            (self.coda_restoration, RuleHints::with_coda_restoration),
            (self.s_variant, RuleHints::with_s_variant),
            (self.iotation, RuleHints::with_iotation),
            (self.yeo_reduction, RuleHints::with_yeo_reduction),
        ];
        for (position, set) in singles {
            if let Some(position) = position {
                hints = set(hints, position);
            }
        }
        Ok(hints)
    }
}

fn convert_line(
    romanizer: &Romanizer<'_>,
    line: &str,
    cli: &Cli,
    hints: &RuleHints,
) -> Result<(), RomanizeError> {
    if cli.all {
        for system in System::ALL {
            let result = romanizer.romanize(line, system, hints)?;
            println!("{}: {}", system.display_name(), result);
        }
    } else {
        println!("{}", romanizer.romanize(line, cli.system, hints)?);
    }
    Ok(())
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let hints = match cli.rule_hints() {
        Ok(hints) => hints,
        Err(e) => {
            eprintln!("힌트 파일 오류: {}", e);
            process::exit(2);
        }
    };

    let romanizer = match Romanizer::new() {
        Ok(romanizer) => romanizer,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let lines: Vec<String> = if cli.text.is_empty() {
        io::stdin().lock().lines().map_while(Result::ok).collect()
    } else {
        vec![cli.text.join(" ")]
    };

    for line in &lines {
        if let Err(e) = convert_line(&romanizer, line, &cli, &hints) {
            eprintln!("{}: {}", line, e);
            process::exit(1);
        }
    }
}
