pub mod send_order_reminders;

pub use send_order_reminders::SendOrderRemindersUseCase;
