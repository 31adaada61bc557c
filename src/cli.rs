// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("financepro")
        .version(crate_version!())
        .about("Personal finance tracking: accounts, transactions, dashboard, AI advice")
        .arg(
            Arg::new("demo")
                .long("demo")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Force demo mode (in-memory seed data, nothing persisted)"),
        )
        .subcommand(
            Command::new("account")
                .about("Manage bank accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account with an opening balance")
                        .arg(Arg::new("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("cash")
                                .help("savings|credit|cash|investment"),
                        )
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .default_value("0")
                                .help("Opening balance (may be negative)"),
                        )
                        .arg(Arg::new("color").long("color").default_value("indigo"))
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .help("Explicit account id (defaults to a generated one)"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List accounts")))
                .subcommand(
                    Command::new("rm")
                        .about("Remove an account and all of its transactions")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Category reference data")
                .subcommand(json_flags(Command::new("list").about("List categories"))),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Post a transaction against an account")
                        .arg(Arg::new("account").long("account").required(true).help("Account id"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("direction")
                                .long("direction")
                                .default_value("expense")
                                .help("income|expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("8")
                                .help("Category id"),
                        )
                        .arg(Arg::new("note").long("note").default_value(""))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD (defaults to now)"),
                        ),
                )
                .subcommand(
                    json_flags(Command::new("list").about("List recent transactions"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(Arg::new("account").long("account").help("Filter by account id"))
                        .arg(
                            Arg::new("direction")
                                .long("direction")
                                .help("Filter by income|expense"),
                        ),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Balance cards, category breakdown, and recent activity")
                .arg(
                    Arg::new("advice")
                        .long("advice")
                        .action(ArgAction::SetTrue)
                        .help("Also fetch the AI financial advice"),
                ),
        )
        .subcommand(Command::new("advice").about("Fetch the AI financial advice"))
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export transactions to a file")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for integrity issues"))
        .subcommand(
            Command::new("session")
                .about("Session gate: demo vs authenticated")
                .subcommand(Command::new("status").about("Show the current mode"))
                .subcommand(
                    Command::new("login")
                        .about("Configure a profile, switching to authenticated mode")
                        .arg(Arg::new("profile").required(true)),
                )
                .subcommand(Command::new("logout").about("Clear the profile, back to demo mode")),
        )
}
