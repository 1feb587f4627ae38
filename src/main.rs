//! Yamin - 야민정음 변환 CLI

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use yamin::config::load_config;
use yamin::rules::{TransformMode, Yaminator};

fn print_usage() {
    println!("사용법: yamin [옵션] [텍스트]");
    println!();
    println!("옵션:");
    println!("  -m, --mode <MODE>  변환 모드: transform / rotate / transrotate (기본: transrotate)");
    println!("      --db <DIR>     규칙 디렉토리 (dic_naive.txt, dic_naive_rot.txt)");
    println!("  -h, --help         도움말 출력");
    println!();
    println!("텍스트를 생략하면 표준 입력을 한 줄씩 변환합니다.");
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();

    let mut mode: Option<TransformMode> = None;
    let mut db_dir: Option<PathBuf> = None;
    let mut text_args: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-m" | "--mode" => {
                let value = match args.next() {
                    Some(value) => value,
                    None => {
                        eprintln!("오류: {} 옵션에 값이 필요합니다", arg);
                        std::process::exit(1);
                    }
                };
                mode = match TransformMode::from_token(&value) {
                    Some(mode) => Some(mode),
                    None => {
                        eprintln!(
                            "오류: 알 수 없는 모드 '{}' (transform / rotate / transrotate)",
                            value
                        );
                        std::process::exit(1);
                    }
                };
            }
            "--db" => {
                let value = match args.next() {
                    Some(value) => value,
                    None => {
                        eprintln!("오류: --db 옵션에 값이 필요합니다");
                        std::process::exit(1);
                    }
                };
                db_dir = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') => {
                eprintln!("오류: 알 수 없는 옵션 '{}'", other);
                eprintln!("yamin --help 로 사용법을 확인하세요");
                std::process::exit(1);
            }
            other => {
                // 첫 번째 일반 인자부터는 모두 변환할 텍스트로 취급
                text_args.push(other.to_string());
                text_args.extend(args.by_ref());
            }
        }
    }

    // --db > 설정 파일 > 내장 사전 순으로 규칙 로드
    let db_dir = db_dir.or(config.db_dir);
    let engine = match &db_dir {
        Some(dir) => match Yaminator::load(dir) {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("규칙 로드 실패 ({}): {}", dir.display(), e);
                std::process::exit(1);
            }
        },
        None => match Yaminator::builtin() {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("내장 사전 로드 실패: {}", e);
                std::process::exit(1);
            }
        },
    };
    let mode = mode.unwrap_or(config.mode);

    log::info!(
        "규칙 {}개, 회전 {}개, 예외 {}개 로드 (모드: {})",
        engine.rule_count(),
        engine.rotation_count(),
        engine.exception_count(),
        mode.as_str()
    );

    // 인자로 받은 텍스트는 한 번 변환하고 종료
    if !text_args.is_empty() {
        let text = text_args.join(" ");
        println!("{}", engine.convert(mode, &text));
        return;
    }

    // 텍스트가 없으면 표준 입력을 한 줄씩 변환
    // 파이프 입력일 때는 프롬프트 없이 변환 결과만 출력
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut reader = stdin.lock();
    let mut line = String::new();
    loop {
        if interactive {
            print!(">> ");
            if io::stdout().flush().is_err() {
                break;
            }
        }
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let input = line.trim_end_matches(['\n', '\r']);
                let output = engine.convert(mode, input);
                if interactive {
                    println!("<< {}", output);
                } else {
                    println!("{}", output);
                }
            }
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        }
    }
}
