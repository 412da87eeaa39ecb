pub mod ask_question;
