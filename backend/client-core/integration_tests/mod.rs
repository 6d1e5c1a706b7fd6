mod bot_client;
mod helpers;
mod primary_view;
mod secondary_view;
mod upload;
