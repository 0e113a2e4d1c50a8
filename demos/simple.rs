use clap::Parser;
use module_request::error::Result;
use module_request::RequestDispatcher;
use tokio::sync::oneshot;

/// Sends one module request and prints the response text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the backend serving `request` (e.g., http://localhost:8888/)
    #[arg(short, long)]
    url: String,

    /// Module class that should handle the message
    #[arg(short = 'c', long)]
    class: String,

    /// Message for the module
    #[arg(short, long)]
    message: String,

    /// Send as POST instead of GET
    #[arg(short, long, action = clap::ArgAction::SetTrue, default_value_t = false)]
    post: bool,

    /// Seconds to wait for a reply before giving up
    #[arg(short, long, default_value_t = 10)]
    wait: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let dispatcher = RequestDispatcher::new(&args.url)?;

    let (tx, rx) = oneshot::channel();
    if args.post {
        dispatcher.send_post(
            &args.class,
            &args.message,
            Some(Box::new(move |text: String| {
                let _ = tx.send(text);
            })),
        );
    } else {
        dispatcher.send_get(&args.class, &args.message, move |text| {
            let _ = tx.send(text);
        });
    }

    // The dispatcher never reports failures, so a dropped sender or the
    // deadline are the only signs that nothing came back.
    match tokio::time::timeout(std::time::Duration::from_secs(args.wait), rx).await {
        Ok(Ok(text)) => println!("{}", text),
        Ok(Err(_)) => eprintln!("No response (non-200 status or transport failure)."),
        Err(_) => eprintln!("No response within {} seconds.", args.wait),
    }

    Ok(())
}
