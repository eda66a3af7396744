// Host-side tests for the stepped contact form.

use folio_core::contact::*;
use folio_core::content::PERSONAL_INFO;

fn flow() -> ContactFlow {
    ContactFlow::new(PERSONAL_INFO.whatsapp)
}

#[test]
fn empty_field_blocks_progress() {
    let mut f = flow();
    assert_eq!(f.next(), ContactOutcome::Blocked);
    assert_eq!(f.step(), ContactStep::Name);
    f.set_current("Ada");
    assert_eq!(f.next(), ContactOutcome::Advanced(ContactStep::Email));
    assert_eq!(f.next(), ContactOutcome::Blocked);
    assert_eq!(f.step(), ContactStep::Email);
}

#[test]
fn whitespace_counts_as_filled() {
    let mut f = flow();
    f.set_current(" ");
    assert_eq!(f.next(), ContactOutcome::Advanced(ContactStep::Email));
}

#[test]
fn steps_advance_in_order_with_progress() {
    let mut f = flow();
    let mut seen = vec![f.step()];
    for value in ["Ada", "ada@example.com"] {
        f.set_current(value);
        match f.next() {
            ContactOutcome::Advanced(step) => seen.push(step),
            other => panic!("unexpected {:?}", other),
        }
    }
    assert_eq!(seen, ContactStep::ALL.to_vec());
    assert!((f.progress_percent() - 100.0).abs() < 1e-9);
}

#[test]
fn final_step_builds_whatsapp_link() {
    let mut f = flow();
    f.set_current("Ada");
    f.next();
    f.set_current("ada@example.com");
    f.next();
    f.set_current("Hello");
    let ContactOutcome::Submit(url) = f.next() else {
        panic!("expected a submit");
    };
    assert!(url.starts_with("https://wa.me/923133258330?text="));
    let name = url.find("Ada").expect("name");
    let email = url.find("ada%40example.com").expect("email");
    let message = url.find("Hello").expect("message");
    assert!(name < email && email < message);
    // submitting does not reset the form
    assert_eq!(f.form().name, "Ada");
    assert_eq!(f.step(), ContactStep::Message);
}

#[test]
fn message_text_lists_fields() {
    let form = ContactForm {
        name: "Ada".into(),
        email: "a@b.c".into(),
        message: "Hi".into(),
    };
    assert_eq!(form.message_text(), "*Name:* Ada\n*Email:* a@b.c\n*Message:* Hi");
    let link = whatsapp_link("123", &form);
    assert_eq!(
        link,
        "https://wa.me/123?text=*Name%3A*%20Ada%0A*Email%3A*%20a%40b.c%0A*Message%3A*%20Hi"
    );
}

#[test]
fn encoding_keeps_unreserved_marks() {
    assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(encode_component("a&b=c?"), "a%26b%3Dc%3F");
    assert_eq!(encode_component("é"), "%C3%A9");
}

#[test]
fn step_metadata() {
    assert_eq!(ContactStep::Email.key(), "email");
    assert_eq!(ContactStep::Message.index(), 2);
    assert!(!ContactStep::Name.label().is_empty());
    assert!(!ContactStep::Message.placeholder().is_empty());
}
