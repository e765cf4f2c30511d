use arp::{Command, Counter, Flag, MutEx, Parser, Positional, Valued};

fn main() {
    let parser = Parser::new([Command::new(
        "new",
        Parser::new([
            Positional::new("name").into(),
            Valued::new('s')
                .alias("std")
                .choices(["17", "20", "23", "26"])
                .into(),
            Flag::new('g').alias("git").into(),
            Counter::new('v').into(),
            MutEx::new([
                Flag::new('x').alias("exe"),
                Flag::new('l').alias("lib"),
                Flag::new('m').alias("mod"),
            ])
            .into(),
        ]),
    )
    .into()])
    .parse_env();

    if let Some(command) = parser.get::<Command>("new").filter(|c| c.is_invoked()) {
        let flag = |key: &str| command.get::<Flag>(key).map_or(false, Flag::is_set);
        println!(
            "name={} std={} git={} exe={} lib={} mod={} verbose={}",
            command
                .get::<Positional>("name")
                .and_then(Positional::value)
                .unwrap_or_default(),
            command
                .get::<Valued>("std")
                .and_then(Valued::value)
                .unwrap_or_default(),
            flag("git"),
            flag("x"),
            flag("l"),
            flag("m"),
            command.get::<Counter>("v").map_or(0, Counter::count),
        );
    }
}
