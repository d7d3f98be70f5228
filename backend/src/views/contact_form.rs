use maud::{Markup, PreEscaped, html};

use super::background_style;

const SUBMIT_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('contact-form');
  if (!form) { return; }
  var status = document.getElementById('contact-status');
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    var data = new FormData(form);
    var button = form.querySelector('button[type=submit]');
    button.disabled = true;
    status.textContent = 'Sending...';
    fetch('/api/contact', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        name: data.get('name'),
        email: data.get('email'),
        message: data.get('message')
      })
    }).then(function (response) {
      return response.json().then(function (body) {
        if (!response.ok) { throw new Error(body.error || 'Failed to send message'); }
        form.reset();
        status.textContent = 'Thank you! Your message has been sent.';
      });
    }).catch(function (error) {
      status.textContent = error.message;
    }).finally(function () {
      button.disabled = false;
    });
  });
})();
"#;

/// Contact form posting JSON to the contact endpoint.
pub fn contact_form(background: Option<&str>) -> Markup {
    let style = background.map(background_style);
    html! {
        section.contact id="contact" style=[style] {
            h2 { "Get in Touch" }
            form id="contact-form" novalidate {
                label for="contact-name" { "Name" }
                input id="contact-name" type="text" name="name" required;
                label for="contact-email" { "Email" }
                input id="contact-email" type="email" name="email" required;
                label for="contact-message" { "Message" }
                textarea id="contact-message" name="message" rows="5" required {}
                button.button type="submit" { "Send Message" }
                p id="contact-status" role="status" aria-live="polite" {}
            }
            script { (PreEscaped(SUBMIT_SCRIPT)) }
        }
    }
}
