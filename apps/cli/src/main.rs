use anyhow::{anyhow, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{form::validate_draft, load_settings, ContactApi, ContactListing, HttpContactApi};
use shared::domain::{Contact, ContactDraft, ContactId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Manage contacts of a remote agenda from the command line")]
struct Cli {
    /// Base URL of the contact service.
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Agenda to read and write.
    #[arg(long, global = true)]
    agenda: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all contacts, creating the agenda if it does not exist yet.
    List {
        #[arg(long)]
        json: bool,
    },
    Add {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: OptionalFields,
    },
    /// Change a contact; fields left out keep their current value.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: OptionalFields,
    },
    Delete {
        id: i64,
    },
}

#[derive(ClapArgs, Debug, Default)]
struct OptionalFields {
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    address: Option<String>,
}

impl OptionalFields {
    fn apply(self, draft: &mut ContactDraft) {
        if let Some(v) = self.phone {
            draft.phone = v;
        }
        if let Some(v) = self.email {
            draft.email = v;
        }
        if let Some(v) = self.address {
            draft.address = v;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings()
        .with_overrides(cli.api_url, cli.agenda)
        .validate()?;
    let api = HttpContactApi::from_settings(&settings);

    match cli.command {
        Command::List { json } => {
            let contacts = list_or_bootstrap(&api).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&contacts)?);
            } else if contacts.is_empty() {
                println!("No contacts yet. Add your first contact!");
            } else {
                for contact in &contacts {
                    println!("{}", format_contact(contact));
                }
            }
        }
        Command::Add { name, fields } => {
            let mut draft = ContactDraft {
                name,
                ..ContactDraft::default()
            };
            fields.apply(&mut draft);
            validate_draft(&draft)?;
            api.create_contact(&draft).await?;
            println!("Saved contact '{}'", draft.name.trim());
        }
        Command::Update { id, name, fields } => {
            let contact_id = ContactId(id);
            let contacts = list_or_bootstrap(&api).await?;
            let current = contacts
                .iter()
                .find(|contact| contact.id == contact_id)
                .ok_or_else(|| anyhow!("no contact with id {contact_id} in agenda '{}'", api.agenda()))?;
            let mut draft = ContactDraft::from(current);
            if let Some(name) = name {
                draft.name = name;
            }
            fields.apply(&mut draft);
            validate_draft(&draft)?;
            api.update_contact(contact_id, &draft).await?;
            println!("Updated contact {contact_id}");
        }
        Command::Delete { id } => {
            api.delete_contact(ContactId(id)).await?;
            println!("Deleted contact {id}");
        }
    }

    Ok(())
}

async fn list_or_bootstrap(api: &HttpContactApi) -> Result<Vec<Contact>> {
    match api.list_contacts().await? {
        ContactListing::Found(contacts) => Ok(contacts),
        ContactListing::AgendaMissing { status } => {
            tracing::info!(status = %status, agenda = api.agenda(), "agenda not found; creating it");
            api.create_agenda()
                .await
                .with_context(|| format!("could not create agenda '{}'", api.agenda()))?;
            Ok(Vec::new())
        }
    }
}

fn format_contact(contact: &Contact) -> String {
    let mut line = format!("#{} {}", contact.id, contact.name);
    for value in [contact.phone_text(), contact.email_text(), contact.address_text()] {
        if !value.is_empty() {
            line.push_str(" | ");
            line.push_str(value);
        }
    }
    line
}
