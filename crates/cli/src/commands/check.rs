use crate::di::RewriteServices;

pub fn run_check(services: &RewriteServices) -> anyhow::Result<()> {
    let rules = services.rule_table.snapshot();

    println!(
        "response rewriting: {}",
        if services.response_rewrite { "enabled" } else { "disabled" }
    );
    println!("{} response rule(s)", rules.len());
    for (index, rule) in rules.iter().enumerate() {
        println!("  #{:<3} {}", index, rule);
    }

    Ok(())
}
