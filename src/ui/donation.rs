use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::donation::DonationForm;
use crate::Message;

/// Plant-a-tree pledge form
pub fn donation_form(form: &DonationForm) -> Element<Message> {
    let inputs = row![
        text_input("Your name", &form.name)
            .on_input(Message::DonorNameChanged)
            .on_submit(Message::SubmitDonation),
        text_input("Email", &form.email)
            .on_input(Message::DonorEmailChanged)
            .on_submit(Message::SubmitDonation),
        text_input("Number of trees", &form.count)
            .on_input(Message::DonorCountChanged)
            .on_submit(Message::SubmitDonation)
            .width(Length::Fixed(160.0)),
        button(text("Donate")).on_press(Message::SubmitDonation),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    column![text("Plant a Tree").size(20), inputs]
        .spacing(8)
        .into()
}
