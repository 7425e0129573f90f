pub mod admin_expense_routes;
pub mod auth_routes;
pub mod dispatch_routes;
pub mod employee_routes;
pub mod maintenance_routes;
pub mod payroll_routes;
