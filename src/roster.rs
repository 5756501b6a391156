use crate::errors::RosterError;
use crate::models::{AddMemberRequest, Member, Role, Roster};
use chrono::NaiveDate;

impl Roster {
    pub fn add_member(
        &mut self,
        request: AddMemberRequest,
        today: NaiveDate,
    ) -> Result<Member, RosterError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(RosterError::MissingName);
        }
        let role = Role::parse(&request.role)
            .ok_or_else(|| RosterError::UnknownTeam(request.role.trim().to_string()))?;

        let member = Member {
            name: name.to_string(),
            role,
            recruited: today,
            instagram: trimmed_or_empty(request.instagram),
            prints: 0,
            status: role.default_status().to_string(),
            phone: trimmed_or_empty(request.phone),
        };
        self.members.push(member.clone());
        Ok(member)
    }

    pub fn list(&self, role: Role) -> Vec<Member> {
        self.members
            .iter()
            .filter(|member| member.role == role)
            .cloned()
            .collect()
    }

    pub fn count(&self, role: Role) -> usize {
        self.members.iter().filter(|member| member.role == role).count()
    }
}

fn trimmed_or_empty(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
