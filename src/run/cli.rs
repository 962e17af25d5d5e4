use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use cardwise::catalog::{ecosystem_label, find_product};
use cardwise::classify::classify;
use cardwise::config::{positional, Settings};
use cardwise::engine::{
    aggregate_spend_over, build_recommendations, compute_reward, project, summarize_with,
    window_start, DateRange, UnscheduledCards,
};
use cardwise::import::Snapshot;
use cardwise::models::SpendCategory;

use super::format::{format_money, format_points, truncate};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "recommend" | "r" => cli_recommend(&args[1..]),
        "spending" => cli_spending(&args[1..]),
        "project" | "p" => cli_project(&args[1..]),
        "summary" | "s" => cli_summary(&args[1..]),
        "reward" => cli_reward(&args[1..]),
        "classify" => cli_classify(&args[1..]),
        "products" => cli_products(&args[1..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("cardwise {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("Cardwise — best card per category and reward projections");
    println!();
    println!("Usage: cardwise <command> [options]");
    println!();
    println!("Commands:");
    println!("  recommend                     Best owned card for each spend category");
    println!("  spending                      Average monthly spend over the trailing window");
    println!("  project                       Forecast points per rewards ecosystem");
    println!("  summary                       Rewards earned by recorded transactions");
    println!("    --from <YYYY-MM-DD>         Start of range (inclusive)");
    println!("    --to <YYYY-MM-DD>           End of range (inclusive)");
    println!("  reward <amount> <category> <product>");
    println!("                                Reward one purchase would earn");
    println!("  classify <mcc>                Spend category for a merchant-category code");
    println!("  products                      List known card products");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --data <dir>                  Data directory (cards.csv, transactions.csv, schedules.csv, valuations.csv)");
    println!("  --window <n>                  Trailing window in months (default: 3)");
    println!("  --months <n>                  Months to project (default: 12)");
    println!("  --as-of <YYYY-MM-DD>          Treat this date as today");
    println!("  --json                        Print JSON instead of a table");
}

fn load(args: &[String]) -> Result<(Settings, Snapshot)> {
    let settings = Settings::from_env(args)?;
    std::fs::create_dir_all(&settings.data_dir).with_context(|| {
        format!("Failed to create data directory: {}", settings.data_dir.display())
    })?;
    let snapshot = Snapshot::load(&settings.data_dir)
        .with_context(|| format!("Failed to load data from {}", settings.data_dir.display()))?;
    Ok((settings, snapshot))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cli_recommend(args: &[String]) -> Result<()> {
    let (settings, snap) = load(args)?;
    let recs = build_recommendations(&snap.cards);
    if settings.json {
        return print_json(&recs);
    }

    if let Some(message) = recs.status.message() {
        println!("{message}");
        return Ok(());
    }
    if recs.is_empty() {
        println!("No card beats the 1x baseline in any category");
        return Ok(());
    }

    println!("{:<20} {:<32} Multiplier", "Category", "Card");
    println!("{}", "─".repeat(64));
    for rec in &recs.recommendations {
        println!(
            "{:<20} {:<32} {}x",
            rec.category.label(),
            truncate(&rec.card_name, 32),
            rec.multiplier.normalize()
        );
    }
    println!();
    println!("Cards analyzed: {}", recs.cards_analyzed);
    Ok(())
}

fn cli_spending(args: &[String]) -> Result<()> {
    let (settings, snap) = load(args)?;
    let start = window_start(as_of_midnight(&settings)?, settings.window_months);
    let profile = aggregate_spend_over(&snap.transactions, start, settings.window_months)?;
    if settings.json {
        return print_json(&profile);
    }

    if profile.is_empty() {
        println!("No spending since {}", profile.window_start);
        return Ok(());
    }

    println!(
        "Average monthly spend since {} ({} months)",
        profile.window_start, profile.months
    );
    println!("{}", "─".repeat(48));
    for entry in profile.iter() {
        println!(
            "  {:<20} {:>12}  {:>4} txns",
            entry.category.label(),
            format_money(entry.average_amount),
            entry.average_count
        );
    }
    println!(
        "  {:<20} {:>12}",
        "Total",
        format_money(profile.total_monthly_average())
    );
    Ok(())
}

fn cli_project(args: &[String]) -> Result<()> {
    let (settings, snap) = load(args)?;
    let start = window_start(as_of_midnight(&settings)?, settings.window_months);
    let profile = aggregate_spend_over(&snap.transactions, start, settings.window_months)?;
    let projection = project(&profile, &snap.cards, settings.projection_months);
    if settings.json {
        return print_json(&projection);
    }

    if projection.is_empty() {
        println!("No active cards to project");
        return Ok(());
    }

    let valuations = &snap.valuations;
    for summary in &projection.summary {
        println!("{}", ecosystem_label(&summary.ecosystem));
        println!("{}", "─".repeat(48));
        for point in projection.points_for(&summary.ecosystem) {
            let month = point
                .calendar_month(settings.as_of)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_else(|| format!("+{}", point.month_offset + 1));
            println!(
                "  {:<10} {:>12} {:>14}",
                month,
                format_points(point.projected_points),
                format_points(point.cumulative_points)
            );
        }
        println!("  Avg/month: {}", format_points(summary.avg_monthly_points));
        let total = format_points(summary.final_cumulative_points);
        match valuations.estimated_value(&summary.ecosystem, summary.final_cumulative_points) {
            Some(value) => println!("  Total:     {total} (~{})", format_money(value)),
            None => println!("  Total:     {total}"),
        }
        println!();
    }
    Ok(())
}

fn cli_summary(args: &[String]) -> Result<()> {
    let (settings, snap) = load(args)?;
    let range = DateRange {
        from: settings.from,
        to: settings.to,
    };
    let summary = summarize_with(
        &snap.transactions,
        &snap.cards,
        range,
        UnscheduledCards::CountSpend,
    )?;
    if settings.json {
        return print_json(&summary);
    }

    println!(
        "Transactions: {}  Spend: {}",
        summary.totals.count,
        format_money(summary.totals.spend)
    );
    if !summary.by_category.is_empty() {
        println!();
        println!("By category:");
        for cat in &summary.by_category {
            println!(
                "  {:<20} {:>12} {:>10} earned",
                cat.category.label(),
                format_money(cat.totals.spend),
                format_points(cat.totals.earned)
            );
        }
    }
    if !summary.by_card.is_empty() {
        println!();
        println!("By card:");
        for card in &summary.by_card {
            println!(
                "  {:<32} {:>12} {:>10} earned",
                truncate(&card.card_name, 32),
                format_money(card.totals.spend),
                format_points(card.totals.earned)
            );
        }
    }
    if !summary.by_ecosystem.is_empty() {
        println!();
        println!("By ecosystem:");
        for eco in &summary.by_ecosystem {
            println!(
                "  {:<32} {:>10} {}",
                ecosystem_label(&eco.ecosystem),
                format_points(eco.earned),
                eco.currency.as_str().to_lowercase()
            );
        }
    }
    if !summary.unscheduled_cards.is_empty() {
        println!();
        println!(
            "No reward schedule (spend counted, nothing earned): {}",
            summary.unscheduled_cards.join(", ")
        );
    }
    Ok(())
}

fn cli_reward(args: &[String]) -> Result<()> {
    let rest = positional(args);
    let [_, amount, category, product @ ..] = rest.as_slice() else {
        anyhow::bail!("Usage: cardwise reward <amount> <category> <product>");
    };
    if product.is_empty() {
        anyhow::bail!("Usage: cardwise reward <amount> <category> <product>");
    }

    let amount = Decimal::from_str(amount.trim_start_matches('$'))
        .with_context(|| format!("Invalid amount: {amount}"))?;
    let category = SpendCategory::from_str(category)?;
    let product_name = product.join(" ");

    let (_, snap) = load(args)?;
    let product = find_product(&snap.products, &product_name)
        .ok_or_else(|| anyhow::anyhow!("Card product '{product_name}' not found"))?;
    let reward = compute_reward(amount, category, &product.schedule)?;

    println!(
        "{} on {}: {} {} at {}x ({})",
        category.label(),
        product.name(),
        reward.earned.normalize(),
        reward.currency.as_str().to_lowercase(),
        reward.multiplier.normalize(),
        ecosystem_label(&reward.ecosystem)
    );
    Ok(())
}

fn cli_classify(args: &[String]) -> Result<()> {
    let rest = positional(args);
    let Some(code) = rest.get(1) else {
        anyhow::bail!("Usage: cardwise classify <mcc>");
    };
    let category = classify(code);
    println!("{code} → {} ({})", category, category.label());
    Ok(())
}

fn cli_products(args: &[String]) -> Result<()> {
    let (_, snap) = load(args)?;
    println!(
        "{:<28} {:<18} {:>8} {:<10} {:<12} Rates",
        "Product", "Issuer", "Fee", "Currency", "Ecosystem"
    );
    println!("{}", "─".repeat(96));
    for product in &snap.products {
        let s = &product.schedule;
        let rates: Vec<String> = s
            .multipliers
            .iter()
            .map(|(c, r)| format!("{}={}", c, r.normalize()))
            .collect();
        println!(
            "{:<28} {:<18} {:>8} {:<10} {:<12} base={} {}",
            truncate(&s.name, 28),
            truncate(&product.issuer, 18),
            format_money(product.annual_fee),
            s.currency,
            s.ecosystem,
            s.base_earn_rate.normalize(),
            rates.join(" ")
        );
    }
    Ok(())
}

fn as_of_midnight(settings: &Settings) -> Result<chrono::NaiveDateTime> {
    settings
        .as_of
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("Invalid as-of date"))
}
