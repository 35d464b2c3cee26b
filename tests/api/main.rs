mod contact;
mod helpers;
mod images;
