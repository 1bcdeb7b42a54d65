use crate::{
    bulk,
    placeholders::Placeholders,
    render,
};
use colored::Colorize;
use libcommon::ChatError;
use std::{fmt::Display, sync::Mutex};

/// Permission which grants everything
pub const ANY_PERMISSION: &str = "*";

/// Someone or something a finished message can be delivered to
pub trait Recipient: Send + Sync {
    /// Display name of the recipient
    fn name(&self) -> String;

    /// Deliver an already resolved message
    fn send_message(&self, message: &str);

    /// Check if the recipient holds the permission
    fn has_permission(&self, permission: &str) -> bool;
}

/// Everyone currently eligible to receive a broadcast
pub trait Audience {
    fn recipients(&self) -> Vec<&dyn Recipient>;
}

/// Prepare the message and deliver it to the recipient.
/// Empty message is not sent at all.
pub fn send(recipient: &dyn Recipient, message: &str, ph: Option<&Placeholders>) {
    if message.is_empty() {
        return;
    }

    recipient.send_message(&bulk::prepare(message, ph));
}

/// Same as [`send`], with placeholders as a flat `token, value, ...` list.
pub fn send_flat(recipient: &dyn Recipient, message: &str, flat: &[&dyn Display]) -> Result<(), ChatError> {
    if message.is_empty() {
        return Ok(());
    }

    send(recipient, message, Some(&Placeholders::from_flat(flat)?));
    Ok(())
}

/// Deliver the message to everyone in the audience who has the `permission`,
/// or to everyone if no permission is required.
///
/// The message is prepared once. Returns how many recipients got it.
pub fn broadcast(audience: &dyn Audience, message: &str, permission: Option<&str>, ph: Option<&Placeholders>) -> usize {
    if message.is_empty() {
        return 0;
    }

    let out = bulk::prepare(message, ph);
    let mut delivered = 0;
    for r in audience.recipients().into_iter().filter(|r| permission.is_none_or(|p| r.has_permission(p))) {
        log::trace!("Delivering to {}", r.name());
        r.send_message(&out);
        delivered += 1;
    }

    log::debug!("Broadcast delivered to {delivered} recipient(s)");
    delivered
}

/// Check a permission against a granted list. `*` grants all.
fn granted(perms: &[String], permission: &str) -> bool {
    perms.iter().any(|p| p == ANY_PERMISSION || p == permission)
}

/// Recipient which prints to the terminal
pub struct ConsoleRecipient {
    name: Option<String>,
    permissions: Vec<String>,
    ansi: bool,
}

impl ConsoleRecipient {
    /// The local operator. Holds every permission, prints messages as they are.
    pub fn operator(ansi: bool) -> Self {
        ConsoleRecipient { name: None, permissions: vec![ANY_PERMISSION.to_string()], ansi }
    }

    /// A named recipient, messages are prefixed with the name.
    pub fn new(name: &str, permissions: Vec<String>, ansi: bool) -> Self {
        ConsoleRecipient { name: Some(name.to_string()), permissions, ansi }
    }

    fn render(&self, message: &str) -> String {
        if self.ansi { render::to_ansi(message) } else { render::to_plain(message) }
    }
}

impl Recipient for ConsoleRecipient {
    fn name(&self) -> String {
        self.name.clone().unwrap_or("console".to_string())
    }

    fn send_message(&self, message: &str) {
        match &self.name {
            Some(name) => println!("{}: {}", name.bright_yellow(), self.render(message)),
            None => println!("{}", self.render(message)),
        }
    }

    fn has_permission(&self, permission: &str) -> bool {
        granted(&self.permissions, permission)
    }
}

/// Recipient which keeps everything it receives
#[derive(Default)]
pub struct MemoryRecipient {
    name: String,
    permissions: Vec<String>,
    messages: Mutex<Vec<String>>,
}

impl MemoryRecipient {
    pub fn new(name: &str, permissions: &[&str]) -> Self {
        MemoryRecipient { name: name.to_string(), permissions: permissions.iter().map(|p| p.to_string()).collect(), ..Default::default() }
    }

    /// Retrieve the delivered messages
    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl Recipient for MemoryRecipient {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn send_message(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }

    fn has_permission(&self, permission: &str) -> bool {
        granted(&self.permissions, permission)
    }
}

/// Fixed set of recipients
#[derive(Default)]
pub struct StaticAudience {
    members: Vec<Box<dyn Recipient>>,
}

impl StaticAudience {
    pub fn new() -> Self {
        StaticAudience::default()
    }

    pub fn add(&mut self, r: Box<dyn Recipient>) {
        self.members.push(r);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Audience for StaticAudience {
    fn recipients(&self) -> Vec<&dyn Recipient> {
        self.members.iter().map(|m| m.as_ref()).collect()
    }
}
