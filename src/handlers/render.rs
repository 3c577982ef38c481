use std::fmt::Write;

use axum::response::Html;
use chrono::NaiveDate;

use crate::models::{wire, Reservation, ReservationStatus, Table};
use crate::views::dashboard::{CANCEL_PROMPT, FINISH_PROMPT};
use crate::views::{
    DashboardState, Listing, ReservationFormView, Route, SearchView, SeatView, TableFormView,
};

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} | Periodic Tables</title></head>\n\
         <body>\n\
         <nav>\
         <a href=\"{dashboard}\">Dashboard</a> \
         <a href=\"{search}\">Search</a> \
         <a href=\"{new_reservation}\">New Reservation</a> \
         <a href=\"{new_table}\">New Table</a>\
         </nav>\n\
         <main>\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        dashboard = Route::Dashboard { date: None },
        search = Route::Search,
        new_reservation = Route::NewReservation,
        new_table = Route::NewTable,
    ))
}

pub fn alert(message: &str) -> String {
    format!("<div class=\"alert alert-danger\">{}</div>", escape(message))
}

pub fn alert_page(message: &str) -> Html<String> {
    page("Error", &alert(message))
}

fn confirm_form(action: &str, prompt: &str, date: NaiveDate, label: &str, data_attr: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\" onsubmit=\"return window.confirm('{prompt}')\">\
         <input type=\"hidden\" name=\"confirmed\" value=\"true\">\
         <input type=\"hidden\" name=\"date\" value=\"{date}\">\
         <button type=\"submit\" {data_attr}>{label}</button>\
         </form>",
        action = escape(action),
        prompt = escape(prompt),
        date = wire::format_date(date),
    )
}

fn reservation_card(out: &mut String, reservation: &Reservation, date: NaiveDate, actions: bool) {
    let id = &reservation.reservation_id;
    let draft = &reservation.draft;
    let _ = write!(
        out,
        "<div class=\"reservation\">\
         <h5>{first} {last} <span>{time}</span></h5>\
         <p>{mobile}</p>\
         <p>People: {people}</p>\
         <p>Date: {day}</p>\
         <div data-reservation-id-status=\"{id}\">{status}</div>",
        first = escape(&draft.first_name),
        last = escape(&draft.last_name),
        time = wire::format_time(draft.reservation_time),
        mobile = escape(&draft.mobile_number),
        people = draft.party_size,
        day = wire::format_date(draft.reservation_date),
        id = escape(id.as_str()),
        status = reservation.status.label(),
    );

    if actions {
        let _ = write!(
            out,
            "<a href=\"{edit}\"><button>Edit</button></a>",
            edit = escape(&Route::EditReservation(id.clone()).path())
        );
        out.push_str(&confirm_form(
            &format!("/reservations/{id}/cancel"),
            CANCEL_PROMPT,
            date,
            "Cancel",
            &format!("data-reservation-id-cancel=\"{}\"", escape(id.as_str())),
        ));
        if reservation.status == ReservationStatus::Booked {
            let _ = write!(
                out,
                "<a href=\"{seat}\"><button>Seat</button></a>",
                seat = escape(&Route::SeatReservation(id.clone()).path())
            );
        }
    }
    out.push_str("</div>\n");
}

fn table_card(out: &mut String, table: &Table, date: NaiveDate) {
    let id = escape(table.table_id.as_str());
    let _ = write!(
        out,
        "<div class=\"table\">\
         <h5>{name}</h5>\
         <p>Capacity: {capacity}</p>\
         <div data-table-id-status=\"{id}\">{status}</div>",
        name = escape(&table.table_name),
        capacity = table.capacity,
        status = table.status_label(),
    );
    if table.is_occupied() {
        out.push_str(&confirm_form(
            &format!("/tables/{}/finish", table.table_id),
            FINISH_PROMPT,
            date,
            "Finish",
            &format!("data-table-id-finish=\"{id}\""),
        ));
    }
    out.push_str("</div>\n");
}

pub fn dashboard(state: &DashboardState, today: NaiveDate, action_error: Option<&str>) -> Html<String> {
    let date = state.date;
    let mut body = String::new();

    let _ = write!(
        body,
        "<h1>Dashboard</h1>\n\
         <div class=\"date-navigation\">\
         <a href=\"{previous}\">Previous</a> \
         <a href=\"{today}\">Today</a> \
         <a href=\"{next}\">Next</a>\
         </div>\n",
        previous = Route::Dashboard { date: Some(state.previous_date()) },
        today = Route::Dashboard { date: Some(today) },
        next = Route::Dashboard { date: Some(state.next_date()) },
    );

    for error in [action_error, state.reservations_error.as_deref(), state.tables_error.as_deref()]
        .into_iter()
        .flatten()
    {
        body.push_str(&alert(error));
        body.push('\n');
    }

    let _ = writeln!(body, "<h4>Reservations for {}</h4>", wire::format_date(date));
    match state.reservation_listing() {
        Listing::Items(items) => {
            for reservation in items {
                reservation_card(&mut body, reservation, date, true);
            }
        }
        Listing::NotFound => body.push_str("<h3>No reservations found</h3>\n"),
    }

    match state.table_listing() {
        Listing::Items(items) => {
            body.push_str("<h4>Tables:</h4>\n");
            for table in items {
                table_card(&mut body, table, date);
            }
        }
        Listing::NotFound => body.push_str("<h3>No tables found</h3>\n"),
    }

    page("Dashboard", &body)
}

fn errors_block(errors: &[String]) -> String {
    errors.iter().map(|e| alert(e)).collect::<Vec<_>>().join("\n")
}

fn input(label: &str, name: &str, kind: &str, value: &str) -> String {
    format!(
        "<label>{label} <input type=\"{kind}\" name=\"{name}\" value=\"{value}\" required></label><br>\n",
        value = escape(value),
    )
}

pub fn reservation_form(view: &ReservationFormView, action: &str) -> Html<String> {
    let form = &view.form;
    let body = format!(
        "<h1>{title}</h1>\n{errors}\n\
         <form method=\"post\" action=\"{action}\">\n\
         {first}{last}{mobile}{date}{time}{people}\
         <button type=\"submit\">Submit</button> \
         <a href=\"{cancel}\">Cancel</a>\n\
         </form>",
        title = view.title(),
        errors = errors_block(&view.errors),
        action = escape(action),
        first = input("First name", "first_name", "text", &form.first_name),
        last = input("Last name", "last_name", "text", &form.last_name),
        mobile = input("Mobile number", "mobile_number", "tel", &form.mobile_number),
        date = input("Date", "reservation_date", "date", &form.reservation_date),
        time = input("Time", "reservation_time", "time", &form.reservation_time),
        people = input("People", "people", "number", &form.people),
        cancel = Route::Dashboard { date: None },
    );
    page(view.title(), &body)
}

pub fn seat_form(view: &SeatView) -> Html<String> {
    let mut body = String::from("<h1>Seat Reservation</h1>\n");
    body.push_str(&errors_block(&view.errors));
    body.push('\n');

    if let Some(reservation) = &view.reservation {
        reservation_card(&mut body, reservation, reservation.draft.reservation_date, false);
    }

    let _ = write!(
        body,
        "<form method=\"post\" action=\"{}\">\n<select name=\"table_id\" required>\n",
        escape(&Route::SeatReservation(view.reservation_id().clone()).path())
    );
    for table in view.available_tables() {
        let _ = writeln!(
            body,
            "<option value=\"{id}\">{name} - {capacity}</option>",
            id = escape(table.table_id.as_str()),
            name = escape(&table.table_name),
            capacity = table.capacity,
        );
    }
    body.push_str("</select>\n<button type=\"submit\">Submit</button>\n</form>");

    page("Seat Reservation", &body)
}

pub fn table_form(view: &TableFormView) -> Html<String> {
    let body = format!(
        "<h1>New Table</h1>\n{errors}\n\
         <form method=\"post\" action=\"{action}\">\n\
         {name}{capacity}\
         <button type=\"submit\">Submit</button>\n\
         </form>",
        errors = errors_block(&view.errors),
        action = Route::NewTable,
        name = input("Table name", "table_name", "text", &view.form.table_name),
        capacity = input("Capacity", "capacity", "number", &view.form.capacity),
    );
    page("New Table", &body)
}

pub fn search(view: &SearchView) -> Html<String> {
    let mut body = format!(
        "<h1>Search</h1>\n\
         <form method=\"get\" action=\"{action}\">\n\
         <input type=\"tel\" name=\"mobile_number\" placeholder=\"Enter a customer's phone number\" value=\"{value}\" required>\n\
         <button type=\"submit\">Find</button>\n\
         </form>\n",
        action = Route::Search,
        value = escape(&view.mobile_number),
    );

    if let Some(error) = &view.error {
        body.push_str(&alert(error));
    }

    match view.listing() {
        Some(Listing::Items(items)) => {
            for reservation in items {
                let actions = reservation.status != ReservationStatus::Cancelled;
                reservation_card(&mut body, reservation, reservation.draft.reservation_date, actions);
            }
        }
        Some(Listing::NotFound) => body.push_str("<h3>No reservations found</h3>\n"),
        None => {}
    }

    page("Search", &body)
}
