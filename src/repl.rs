//! Interactive text frontend.
//!
//! The REPL is the rendering surface: it binds named store projections and
//! actions to typed commands. All mutation happens on this loop; the only
//! background work is the counter reset timer, which feeds a deferred
//! [`Action`] back through an mpsc channel instead of touching the store.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc};

use storefront_catalog::{Catalog, format_price};
use storefront_core::{Action, EventStream, Store, StoreEvent};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Act(Action),
    Show,
    Products,
    Help,
    Quit,
}

/// Runs the REPL until EOF or `quit`.
pub async fn run<C: Catalog>(mut store: Store<C>) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel::<Action>(16);
    spawn_reset_timer(store.subscribe(), action_tx.clone());

    println!("{}", store.greeting());
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(action) = action_rx.recv() => {
                // Deferred work coming back from the timer task.
                if let Err(err) = store.dispatch(action) {
                    eprintln!("error: {err}");
                }
                print_counter(&store);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match parse(line) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Help) => print_help(),
                    Ok(Input::Show) => print_all(&store),
                    Ok(Input::Products) => print_products(&store),
                    Ok(Input::Act(action)) => apply(&mut store, action),
                    Err(msg) => println!("{msg}"),
                }
            }
        }
    }

    Ok(())
}

/// Turns `ResetScheduled` events into delayed reset actions.
fn spawn_reset_timer(receiver: broadcast::Receiver<StoreEvent>, tx: mpsc::Sender<Action>) {
    let mut events = EventStream::new(receiver);
    tokio::spawn(async move {
        while let Some(event) = events.next().await {
            if let StoreEvent::ResetScheduled { generation, delay } = event {
                let tx = tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    // The store decides whether this generation is still
                    // current; a stale reset is simply ignored.
                    let _ = tx.send(Action::ResetCounter { generation }).await;
                });
            }
        }
    });
}

/// Dispatches an action and echoes the relevant projection.
fn apply<C: Catalog>(store: &mut Store<C>, action: Action) {
    let echo = action.clone();
    if let Err(err) = store.dispatch(action) {
        println!("error: {err}");
        return;
    }
    match echo {
        Action::AddToCart { .. } | Action::RemoveFromCart { .. } => print_cart(store),
        Action::AddToCounter { .. } | Action::ResetCounter { .. } => print_counter(store),
        Action::Login | Action::Logout => {
            println!("logged in: {}", store.is_authenticated());
        }
        Action::SetDraftName { name } => println!("draft: {name}"),
        Action::ConfirmName => {
            println!("confirmed: {}", store.name_form().confirmed().unwrap_or(""));
        }
        Action::ClearNameForm => println!("form cleared"),
        Action::ToggleDetails => print_details(store),
        Action::AddContact { .. } | Action::RemoveContact { .. } => print_contacts(store),
        _ => {}
    }
}

/// Parses one input line into a command.
fn parse(line: &str) -> Result<Input, String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    let action = match command {
        "help" | "?" => return Ok(Input::Help),
        "quit" | "exit" => return Ok(Input::Quit),
        "show" => return Ok(Input::Show),
        "products" => return Ok(Input::Products),

        "login" => Action::Login,
        "logout" => Action::Logout,

        "add" => Action::AddToCart {
            product_id: parse_arg(&rest, "add <product-id>")?,
        },
        "remove" => Action::RemoveFromCart {
            product_id: parse_arg(&rest, "remove <product-id>")?,
        },

        "count" => Action::AddToCounter {
            amount: parse_arg(&rest, "count <amount>")?,
        },

        "name" => {
            if rest.is_empty() {
                return Err("usage: name <draft>".to_string());
            }
            Action::SetDraftName {
                name: rest.join(" "),
            }
        }
        "confirm" => Action::ConfirmName,
        "clear" => Action::ClearNameForm,

        "toggle" => Action::ToggleDetails,

        "contact" => match rest.as_slice() {
            [name, email] => Action::AddContact {
                name: (*name).to_string(),
                email: (*email).to_string(),
                phone: None,
            },
            [name, email, phone] => Action::AddContact {
                name: (*name).to_string(),
                email: (*email).to_string(),
                phone: Some((*phone).to_string()),
            },
            _ => return Err("usage: contact <name> <email> [phone]".to_string()),
        },
        "uncontact" => Action::RemoveContact {
            id: parse_arg(&rest, "uncontact <contact-id>")?,
        },

        other => return Err(format!("unknown command: {other} (try 'help')")),
    };

    Ok(Input::Act(action))
}

/// Parses the single argument of a command.
fn parse_arg<T: std::str::FromStr>(rest: &[&str], usage: &str) -> Result<T, String> {
    match rest {
        [arg] => arg.parse().map_err(|_| format!("usage: {usage}")),
        _ => Err(format!("usage: {usage}")),
    }
}

fn print_help() {
    println!("commands:");
    println!("  show                            print the whole session");
    println!("  products                        list the catalog");
    println!("  login | logout                  flip the auth flag");
    println!("  add <product-id>                add one unit to the cart");
    println!("  remove <product-id>             drop a product's line");
    println!("  count <amount>                  add to the counter");
    println!("  name <draft>                    set the name form draft");
    println!("  confirm | clear                 confirm or clear the form");
    println!("  toggle                          show/hide the details paragraph");
    println!("  contact <name> <email> [phone]  add a contact");
    println!("  uncontact <contact-id>          remove a contact");
    println!("  quit                            exit");
}

fn print_all<C: Catalog>(store: &Store<C>) {
    println!("{}", store.greeting());
    println!("lucky number: {:.3}", store.profile().lucky_number());
    println!("logged in: {}", store.is_authenticated());
    print_details(store);
    match store.name_form().confirmed() {
        Some(name) => println!("confirmed name: {name}"),
        None => println!("confirmed name: (none)"),
    }
    print_counter(store);
    print_contacts(store);
    print_cart(store);
}

fn print_details<C: Catalog>(store: &Store<C>) {
    if store.details_visible() {
        println!("details: you can see them now!");
    } else {
        println!("details: (hidden)");
    }
}

fn print_counter<C: Catalog>(store: &Store<C>) {
    println!(
        "counter: {} -> {}",
        store.counter().value(),
        store.counter_status()
    );
}

fn print_contacts<C: Catalog>(store: &Store<C>) {
    let mut any = false;
    for contact in store.contacts() {
        any = true;
        let phone = contact.phone().unwrap_or("-");
        println!(
            "  {} <{}> {} ({})",
            contact.name(),
            contact.email(),
            phone,
            contact.id()
        );
    }
    if !any {
        println!("  (no contacts)");
    }
}

fn print_cart<C: Catalog>(store: &Store<C>) {
    for line in store.cart_lines() {
        println!(
            "  {} x{} @ {} = {}",
            line.title,
            line.quantity,
            format_price(line.price),
            format_price(line.line_total())
        );
    }
    println!(
        "cart: {} items, total {}",
        store.cart_total_quantity(),
        format_price(store.cart_total_price())
    );
}

fn print_products<C: Catalog>(store: &Store<C>) {
    for product in store.catalog().products() {
        println!("  [{}] {} - {}", product.id, product.title, product.price_display());
    }
}
