//! Server-rendered HTML pages.
//!
//! Every piece of user-supplied text goes through [`encode_safe`] before it
//! is placed into markup.

use domain::models::EventSummaryView;
use html_escape::encode_safe;

/// Collects the attendee form into the JSON shape the attendee API expects
/// and switches to PUT when an existing row is being edited.
const ATTENDEE_FORM_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('attendee-form');
  if (!form) { return; }
  var editing = null;

  document.querySelectorAll('.edit-attendee').forEach(function (button) {
    button.addEventListener('click', function () {
      editing = button.dataset.attendeeId;
      var yes = button.dataset.yes ? button.dataset.yes.split(',') : [];
      form.querySelectorAll('.date-option').forEach(function (box) {
        box.checked = yes.indexOf(box.name) !== -1;
      });
      form.attendeeName.value = button.dataset.name;
      form.attendeeName.required = false;
      form.attendeeEmail.required = false;
      form.querySelector('.identity').hidden = true;
      form.querySelector('button[type=submit]').textContent = 'Update ' + button.dataset.name;
    });
  });

  form.addEventListener('submit', function (event) {
    event.preventDefault();
    var responses = [];
    form.querySelectorAll('.date-option').forEach(function (box) {
      responses.push({ name: box.name, value: box.checked });
    });

    var url = '/api/v1/events/' + form.dataset.hash + '/attendees';
    var method = 'POST';
    var body = { responses: responses };
    if (editing) {
      url += '/' + editing;
      method = 'PUT';
    } else {
      body.attendeeName = { name: 'attendeeName', value: form.attendeeName.value };
      body.attendeeEmail = { name: 'attendeeEmail', value: form.attendeeEmail.value };
    }

    fetch(url, {
      method: method,
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body)
    }).then(function (res) {
      if (res.ok) {
        window.location.reload();
        return;
      }
      return res.json().then(function (err) { window.alert(err.message); });
    });
  });
})();
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = encode_safe(title),
        body = body,
    )
}

pub fn landing_page() -> String {
    layout(
        "Event Scheduler",
        r#"<h1>Find a date that works for everyone</h1>
<p>Propose a few dates, share the link, and see who can make it.</p>
<p><a href="/create">Propose an event</a></p>"#,
    )
}

pub fn create_page() -> String {
    layout(
        "Propose an event",
        r#"<h1>Propose an event</h1>
<form method="post" action="/events">
  <label>Your name <input name="organizerName" required></label>
  <label>Your email <input name="email" type="email" required></label>
  <label>Event name <input name="proposedEventName" required></label>
  <label>Description <textarea name="proposedEventDescription"></textarea></label>
  <label>Dates (comma separated, e.g. 2024-03-01, 2024-03-05)
    <input name="proposedEventDates" required></label>
  <button type="submit">Create event</button>
</form>"#,
    )
}

/// Shareable absolute link to an event page.
pub fn share_url(host: &str, hash_id: &str) -> String {
    format!("http://{}/events/{}", host, hash_id)
}

pub fn share_page(share_url: &str) -> String {
    let url = encode_safe(share_url);
    layout(
        "Share your event",
        &format!(
            r#"<h1>Your event is ready</h1>
<p>Send this link to everyone you want to invite:</p>
<p><a id="share-link" href="{url}">{url}</a></p>"#
        ),
    )
}

pub fn not_found_page(message: &str) -> String {
    layout(
        "Event not found",
        &format!(
            r#"<h1>Event not found</h1>
<p>{}</p>
<p><a href="/create">Propose a new event</a></p>"#,
            encode_safe(message)
        ),
    )
}

/// Availability grid plus the attendee response form.
pub fn event_page(view: &EventSummaryView) -> String {
    let header_cells: String = view
        .dates
        .iter()
        .map(|date| format!("<th>{}</th>", encode_safe(&date.label)))
        .collect();

    let rows: String = view
        .attendees
        .iter()
        .map(|row| {
            let cells: String = row
                .responses
                .iter()
                .map(|r| {
                    if r.response {
                        r#"<td class="yes">Yes</td>"#
                    } else {
                        r#"<td class="no">No</td>"#
                    }
                })
                .collect();
            let yes_ids = row
                .responses
                .iter()
                .filter(|r| r.response)
                .map(|r| r.event_date_id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!(
                r#"<tr><th scope="row">{name}</th>{cells}<td><button type="button" class="edit-attendee" data-attendee-id="{id}" data-name="{name}" data-yes="{yes_ids}">Edit</button></td></tr>"#,
                name = encode_safe(&row.name),
                cells = cells,
                id = row.id,
                yes_ids = yes_ids,
            )
        })
        .collect();

    let footer_cells: String = view
        .dates
        .iter()
        .map(|date| format!(r#"<td class="yes-count">{}</td>"#, date.yes_count))
        .collect();

    let checkboxes: String = view
        .dates
        .iter()
        .map(|date| {
            format!(
                r#"<label><input type="checkbox" class="date-option" name="{id}"> {label}</label>"#,
                id = date.id,
                label = encode_safe(&date.label),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>{title}</h1>
<p class="description">{description}</p>
<p class="organizer">Organized by {organizer} &lt;{email}&gt;</p>
<table class="availability">
<thead><tr><th>Attendee</th>{header_cells}<th></th></tr></thead>
<tbody>
{rows}
</tbody>
<tfoot><tr><th scope="row">Available</th>{footer_cells}<td></td></tr></tfoot>
</table>
<h2>When can you make it?</h2>
<form id="attendee-form" data-hash="{hash}">
  <fieldset class="identity">
    <label>Name <input name="attendeeName" required></label>
    <label>Email <input name="attendeeEmail" type="email" required></label>
  </fieldset>
  <fieldset>{checkboxes}</fieldset>
  <button type="submit">Save availability</button>
</form>
<script>{script}</script>"#,
        title = encode_safe(&view.title),
        description = encode_safe(&view.description),
        organizer = encode_safe(&view.organizer.name),
        email = encode_safe(&view.organizer.email),
        header_cells = header_cells,
        rows = rows,
        footer_cells = footer_cells,
        hash = encode_safe(&view.hash_id),
        checkboxes = checkboxes,
        script = ATTENDEE_FORM_SCRIPT,
    );

    layout(&view.title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::models::{AttendeeRow, DateColumn, DateResponse, OrganizerInfo};

    fn sample_view() -> EventSummaryView {
        EventSummaryView {
            hash_id: "abc".to_string(),
            title: "Dinner <party>".to_string(),
            description: "Bring \"snacks\"".to_string(),
            organizer: OrganizerInfo {
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
            },
            dates: vec![
                DateColumn {
                    id: 1,
                    date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                    label: "Jan 2nd".to_string(),
                    yes_count: 1,
                },
                DateColumn {
                    id: 2,
                    date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                    label: "Jan 3rd".to_string(),
                    yes_count: 0,
                },
            ],
            attendees: vec![AttendeeRow {
                id: 7,
                name: "<script>alert(1)</script>".to_string(),
                responses: vec![DateResponse::new(1, true), DateResponse::new(2, false)],
            }],
        }
    }

    #[test]
    fn test_event_page_escapes_user_text() {
        let html = event_page(&sample_view());

        assert!(html.contains("Dinner &lt;party&gt;"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_event_page_renders_grid() {
        let html = event_page(&sample_view());

        assert!(html.contains("<th>Jan 2nd</th><th>Jan 3rd</th>"));
        assert!(html.contains(r#"<td class="yes">Yes</td><td class="no">No</td>"#));
        assert!(html.contains(r#"<td class="yes-count">1</td><td class="yes-count">0</td>"#));
        assert!(html.contains(r#"data-attendee-id="7""#));
        assert!(html.contains(r#"data-yes="1""#));
        assert!(html.contains(r#"class="date-option" name="2""#));
    }

    #[test]
    fn test_share_url_and_page() {
        let url = share_url("example.com:8080", "abc");
        assert_eq!(url, "http://example.com:8080/events/abc");
        assert!(share_page(&url).contains("http:&#x2F;&#x2F;example.com:8080&#x2F;events&#x2F;abc"));
    }

    #[test]
    fn test_create_page_posts_to_events() {
        let html = create_page();
        assert!(html.contains(r#"action="/events""#));
        for field in [
            "organizerName",
            "email",
            "proposedEventName",
            "proposedEventDescription",
            "proposedEventDates",
        ] {
            assert!(html.contains(&format!(r#"name="{}""#, field)), "missing {}", field);
        }
    }
}
