//! Command-line driver for the order cart
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! menu [filter]        list menu items, optionally filtered by tag
//! add <name>           add one unit of a menu item
//! inc <name>           quick-add "+"
//! dec <name>           quick-add "-"
//! qty <name> <n>       set the quantity of a line
//! tip <rate>           select a tip rate, e.g. 0.18
//! slots                list pickup times
//! pay [HH:MM]          check out
//! ```

use cafe_order::{
    api::{
        checkout::Checkout,
        menu::MenuApi,
        pickup::{pickup_slots_from_now, PickupSlot},
        quick_add::QuickAddPanel,
        tip::TipSelector,
    },
    core::money::format_usd,
    CartConfig, CartSnapshot, MenuItem, OrderCart,
};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Café order cart demo
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the menu (array of items)
    #[clap(short, long)]
    menu: Option<PathBuf>,

    /// JSON file holding the cart configuration
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Print every cart change as JSON instead of a table
    #[clap(long)]
    json: bool,
}

fn default_menu() -> MenuApi {
    let tagged = |name: &str, price: &str, tags: &[&str]| {
        MenuItem::new(name.to_string(), price.to_string())
            .with_tags(tags.iter().map(|t| t.to_string()).collect())
    };

    MenuApi::new(vec![
        tagged("Latte", "4.50", &["hot", "espresso"]),
        tagged("Mocha", "5.00", &["hot", "espresso"]),
        tagged("Cold Brew", "4.25", &["cold", "vegan"]),
        tagged("Chai", "4.00", &["hot", "vegan"]),
        tagged("Croissant", "3.25", &["bakery"]),
    ])
}

fn render(snapshot: &CartSnapshot) {
    for item in &snapshot.line_items {
        println!(
            "  {} x{}  {}",
            item.name,
            item.quantity,
            format_usd(item.line_total())
        );
    }
    println!(
        "  subtotal {}  tip {}  total {}",
        format_usd(snapshot.subtotal),
        format_usd(snapshot.tip),
        format_usd(snapshot.total)
    );
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            CartConfig::from_json(&json)?
        }
        None => CartConfig::default(),
    };

    let menu = match &cli.menu {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading menu {}", path.display()))?;
            MenuApi::from_json(&json)?
        }
        None => default_menu(),
    };

    let quick_add = QuickAddPanel::from_menu(&menu)?;
    let tip_selector = TipSelector::from_config(&config);
    let checkout = Checkout::new();
    let pickup_config = config.pickup.clone();

    let mut cart = OrderCart::with_config(config)?;
    let as_json = cli.json;
    cart.subscribe(move |event, snapshot| {
        if as_json {
            match snapshot.to_json() {
                Ok(json) => println!("{} {}", event.as_str(), json),
                Err(e) => log::warn!("Failed to serialize snapshot: {}", e),
            }
        } else {
            println!("[{}]", event.as_str());
            render(snapshot);
        }
    });

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = words.split_first() else {
            continue;
        };

        // Errors from a single command are reported and leave the cart as it was
        if let Err(e) = run_command(
            command,
            args,
            &mut cart,
            &menu,
            &quick_add,
            &tip_selector,
            &checkout,
            &pickup_config,
        ) {
            eprintln!("error: {:#}", e);
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_command(
    command: &str,
    args: &[&str],
    cart: &mut OrderCart,
    menu: &MenuApi,
    quick_add: &QuickAddPanel,
    tip_selector: &TipSelector,
    checkout: &Checkout,
    pickup_config: &cafe_order::config::PickupConfig,
) -> Result<()> {
    match command {
        "menu" => {
            let filter = args.first().copied().unwrap_or(cafe_order::models::FILTER_ALL);
            for item in menu.filter(filter) {
                println!("  {:<12} {:>6}  {}", item.name, item.price, item.tags.join(" "));
            }
        }
        "add" => menu.add_to_order(cart, &args.join(" "))?,
        "inc" => quick_add.increment(cart, &args.join(" "))?,
        "dec" => quick_add.decrement(cart, &args.join(" "))?,
        "qty" => {
            let (qty, name) = args
                .split_last()
                .ok_or_else(|| anyhow!("usage: qty <name> <n>"))?;
            let qty: i64 = qty.parse().context("quantity must be an integer")?;
            cart.set_quantity(&name.join(" "), qty);
        }
        "tip" => {
            let value = args.first().ok_or_else(|| anyhow!("usage: tip <rate>"))?;
            tip_selector.select(cart, value)?;
        }
        "slots" => {
            for slot in pickup_slots_from_now(pickup_config) {
                println!("  {} ({})", slot.label, slot.value);
            }
        }
        "pay" => {
            println!("{}", checkout.pay_label(cart));
            let slot = args.first().map(|value| PickupSlot {
                label: value.to_string(),
                value: value.to_string(),
            });
            let ticket = checkout.place_order(cart, slot.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&ticket)?);
        }
        other => return Err(anyhow!("unknown command {:?}", other)),
    }

    Ok(())
}
